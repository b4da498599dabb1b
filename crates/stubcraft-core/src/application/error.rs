//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! rendering rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Target file exists and overwrite was not forced.
    #[error("File already exists at {path}")]
    FileAlreadyExists { path: PathBuf },

    /// The host bootstrap file has no unique insertion point.
    #[error("Expected exactly one marker '{marker}' in {path}, found {occurrences}")]
    MarkerNotFound {
        path: PathBuf,
        marker: String,
        occurrences: usize,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Stub store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileAlreadyExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
            ],
            Self::MarkerNotFound {
                path,
                marker,
                occurrences: 0,
            } => vec![
                format!("'{}' has no '{}' marker", path.display(), marker),
                format!("Add a line containing {} where bindings should go", marker),
            ],
            Self::MarkerNotFound { path, marker, .. } => vec![
                format!("'{}' contains '{}' more than once", path.display(), marker),
                "Remove the extra markers so exactly one remains".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StoreLockError => vec![
                "The stub store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::MarkerNotFound { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
