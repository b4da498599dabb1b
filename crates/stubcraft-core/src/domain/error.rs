use thiserror::Error;

use crate::domain::StubKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid class name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid layout setting '{field}': {reason}")]
    InvalidLayout { field: &'static str, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No stub registered for '{kind}'")]
    TemplateNotFound { kind: StubKind },

    /// The marker is absent or ambiguous in the text being spliced.
    #[error("Expected exactly one marker '{marker}', found {occurrences}")]
    MarkerNotFound { marker: String, occurrences: usize },

    /// The rendered statement would leave more than one live marker behind.
    #[error("Statement to splice contains the marker '{marker}'")]
    MarkerInStatement { marker: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be turned into a class name", name),
                "Pass a class name such as UserRepository or Admin/UserRepository".into(),
            ],
            Self::InvalidLayout { field, .. } => vec![
                format!("Check `layout.{}` in your configuration file", field),
                "Run 'stubcraft init --force' to regenerate the defaults".into(),
            ],
            Self::TemplateNotFound { kind } => vec![
                format!("The '{}' stub is missing from the configured stub set", kind),
                format!("Add {}.stub to your stub override directory", kind.file_stem()),
                "Or remove `stubs.path` from your configuration to use the built-in stubs".into(),
            ],
            Self::MarkerNotFound { marker, occurrences } => vec![
                format!("Found {} occurrence(s) of '{}'", occurrences, marker),
                "Make sure the marker appears exactly once in the bootstrap file".into(),
            ],
            Self::MarkerInStatement { marker } => vec![
                format!("Pick a `layout.marker` that cannot appear in generated code, not '{}'", marker),
                "Or adjust binding.stub in your stub override directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::InvalidLayout { .. } | Self::MarkerInStatement { .. } => {
                ErrorCategory::Configuration
            }
            Self::TemplateNotFound { .. } | Self::MarkerNotFound { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
