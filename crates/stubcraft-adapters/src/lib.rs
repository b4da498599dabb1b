//! Infrastructure adapters for Stubcraft.
//!
//! This crate implements the ports defined in `stubcraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use stub_store::{BuiltinStubs, InMemoryStubStore, OverrideStubStore};
