//! Application services.
//!
//! `GenerateService` is the entry point; the other services are the steps
//! it runs and borrow its ports for the length of one call.

pub mod artifact_generator;
mod bootstrap;
mod conflict_guard;
mod generate_service;
mod insertion_splicer;
mod template_engine;

pub use artifact_generator::{ArtifactGenerator, ArtifactKind, ArtifactOutcome};
pub use bootstrap::BootstrapScaffolder;
pub use conflict_guard::ConflictGuard;
pub use generate_service::{GenerateService, GenerationReport};
pub use insertion_splicer::InsertionSplicer;
pub use template_engine::TemplateEngine;
