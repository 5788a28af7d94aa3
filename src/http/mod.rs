//! HTTP transport for automated actions.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, body limit)
//!     → request.rs (request ID, query and form parameters)
//!     → registry (resolve identifier, construct, initialise)
//!     → handler.execute()
//!     → response.rs (handler response or mapped error)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
