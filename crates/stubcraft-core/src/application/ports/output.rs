//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubcraft-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{StubKind, StubTemplate};
use crate::error::StubcraftResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubcraft_adapters::filesystem::LocalFilesystem` (production)
/// - `stubcraft_adapters::filesystem::MemoryFilesystem` (testing)
///
/// No locking is offered: callers assume a single writer per path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StubcraftResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StubcraftResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> StubcraftResult<String>;

    /// Check if a file exists at path.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for stub lookup.
///
/// Implemented by:
/// - `stubcraft_adapters::stub_store::BuiltinStubs` (compiled-in stubs)
/// - `stubcraft_adapters::stub_store::OverrideStubStore` (user directory + fallback)
/// - `stubcraft_adapters::stub_store::InMemoryStubStore` (explicit map)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Load the stub for `kind`.
    ///
    /// Fails with `DomainError::TemplateNotFound` when the store has no
    /// stub for `kind`.
    fn load(&self, kind: StubKind) -> StubcraftResult<StubTemplate>;
}
