//! Stubcraft Core - Generator Engine
//!
//! This crate provides the domain and application layers for the Stubcraft
//! repository scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubcraft-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, ArtifactGenerator,   │
//! │   InsertionSplicer, TemplateEngine)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │        (Driven: Filesystem, Stubs)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubcraft-adapters (Infrastructure)  │
//! │ (LocalFilesystem, BuiltinStubs, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameResolver, RenderContext, splice)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stubcraft_core::{
//!     application::GenerateService,
//!     domain::{GenerationRequest, Layout},
//! };
//!
//! // 1. Validate the request
//! let request = GenerationRequest::new("Admin/UserRepository", false).unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(stubs, filesystem, Layout::default(), "./my-app");
//! let report = service.generate(&request).unwrap();
//! ```

// Domain layer (naming, stubs, splicing)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactGenerator, ArtifactKind, ArtifactOutcome, BootstrapScaffolder, ConflictGuard,
        GenerateService, GenerationReport, InsertionSplicer, TemplateEngine,
        ports::{Filesystem, StubStore},
    };
    pub use crate::domain::{
        Binding, GenerationRequest, Layout, NameResolver, RenderContext, ResolvedIdentity,
        StubKind, StubTemplate,
    };
    pub use crate::error::{StubcraftError, StubcraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
