//! Dispatch registry.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RegistryBuilder::register(identifier, descriptor) ...
//!     → build()
//!     → Registry (immutable, shared via Arc)
//!
//! Per request:
//!     RequestContext
//!     → identifier.rs (normalize path)
//!     → table.rs (exact-match lookup)
//!     → descriptor.rs (construct handler)
//!     → dispatch.rs (initialise and return handler)
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - Exact-match only; no wildcards or path parameters
//! - Unmapped entries fail at construction time, not at lookup time
//! - Explicit errors rather than a silent default handler

mod dispatch;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod table;

pub use descriptor::{ActionFactory, HandlerDescriptor};
pub use error::{ConstructionError, DispatchError};
pub use identifier::{normalize, RouteIdentifier};
pub use table::{Registry, RegistryBuilder};
