//! Automated-action dispatch service.
//!
//! Maps the route identifiers of scheduled (cron) and queued (worker)
//! requests to handler factories, builds a fresh handler per request and
//! initialises it with the request and response context.
//!
//! ```text
//!     request path ──▶ registry ──▶ factory ──▶ handler.initialise ──▶ execute
//!                         │
//!                         └── unknown: RouteNotFound / unmapped: HandlerInstantiation
//! ```

// Core
pub mod action;
pub mod actions;
pub mod registry;
pub mod routes;

// Transport
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use action::{ActionError, AutomatedAction, RequestContext, ResponseContext};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{DispatchError, HandlerDescriptor, Registry, RegistryBuilder, RouteIdentifier};
pub use routes::default_registry;
