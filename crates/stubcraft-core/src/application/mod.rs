//! Application layer for Stubcraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService and the steps it runs)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and performs all I/O
//! through ports. Naming and splicing rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactGenerator, ArtifactKind, ArtifactOutcome, BootstrapScaffolder, ConflictGuard,
    GenerateService, GenerationReport, InsertionSplicer, TemplateEngine,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, StubStore};

pub use error::ApplicationError;
