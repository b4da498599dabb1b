//! Stub store adapters.

mod builtin;
mod memory;
mod override_dir;

pub use builtin::BuiltinStubs;
pub use memory::InMemoryStubStore;
pub use override_dir::OverrideStubStore;
