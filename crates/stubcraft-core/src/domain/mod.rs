//! Core domain layer for Stubcraft.
//!
//! This module contains pure generator logic with no I/O. Filesystem and
//! stub storage concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment access
//! - **Deterministic**: Same input, same identity, same rendered text

pub mod error;
pub mod identity;
pub mod layout;
pub mod render;
pub mod splice;
pub mod stub;

mod naming;

pub use error::{DomainError, ErrorCategory};
pub use identity::{Binding, GenerationRequest, NameResolver, ResolvedIdentity};
pub use layout::Layout;
pub use naming::to_studly_case;
pub use render::RenderContext;
pub use splice::{marker_count, splice};
pub use stub::{StubKind, StubTemplate};
