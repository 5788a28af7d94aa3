//! Handler contract for automated routes.
//!
//! # Data Flow
//! ```text
//! registry constructs handler (zero-argument factory)
//!     → initialise(request, response)   exactly once
//!     → execute()                       handler logic
//!     → take_response()                 back to the transport
//! ```
//!
//! # Design Decisions
//! - Handlers embed an `ActionAttributes` value holding the request-scoped state
//! - `initialise` is a provided method; handlers only supply `execute`
//! - A handler instance lives for exactly one request

pub mod context;

use thiserror::Error;

pub use context::{RequestContext, ResponseContext};

/// Failure reported by a handler while executing.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A parameter the handler needs was not supplied.
    #[error("missing required parameter '{name}'")]
    MissingParameter { name: String },

    /// A parameter was supplied but could not be used.
    #[error("invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The handler ran before `initialise` was called.
    #[error("action used before initialisation")]
    NotInitialised,

    /// Handler logic failed.
    #[error("action failed: {0}")]
    Failed(String),
}

impl ActionError {
    /// True when the request itself was at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ActionError::MissingParameter { .. } | ActionError::InvalidParameter { .. }
        )
    }
}

/// Request-scoped state shared by every automated action.
#[derive(Debug, Default)]
pub struct ActionAttributes {
    request: Option<RequestContext>,
    response: ResponseContext,
}

impl ActionAttributes {
    /// Store the transport context. Only the first call takes effect.
    pub fn initialise(&mut self, request: RequestContext, response: ResponseContext) {
        if let Some(existing) = &self.request {
            tracing::warn!(
                path = %existing.path(),
                ignored_path = %request.path(),
                "Action already initialised; ignoring second initialisation"
            );
            return;
        }
        self.request = Some(request);
        self.response = response;
    }

    pub fn is_initialised(&self) -> bool {
        self.request.is_some()
    }

    pub fn request(&self) -> Result<&RequestContext, ActionError> {
        self.request.as_ref().ok_or(ActionError::NotInitialised)
    }

    pub fn response(&self) -> &ResponseContext {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut ResponseContext {
        &mut self.response
    }

    /// Optional request parameter.
    pub fn request_param(&self, name: &str) -> Option<&str> {
        self.request.as_ref().and_then(|r| r.param(name))
    }

    /// Request parameter that must be present.
    pub fn required_param(&self, name: &str) -> Result<&str, ActionError> {
        self.request()?
            .param(name)
            .ok_or_else(|| ActionError::MissingParameter {
                name: name.to_string(),
            })
    }

    /// Hand the response back, leaving a default one in its place.
    pub fn take_response(&mut self) -> ResponseContext {
        std::mem::take(&mut self.response)
    }
}

/// Contract every dispatchable handler satisfies.
///
/// Construction happens through the registry's zero-argument factory, after
/// which the dispatcher calls [`AutomatedAction::initialise`] exactly once.
pub trait AutomatedAction: Send + std::fmt::Debug {
    /// Short, stable handler name used in logs and metrics.
    fn name(&self) -> &'static str;

    fn attributes(&self) -> &ActionAttributes;

    fn attributes_mut(&mut self) -> &mut ActionAttributes;

    /// Run the handler logic, writing into the response context.
    fn execute(&mut self) -> Result<(), ActionError>;

    /// Inject the per-request transport context.
    fn initialise(&mut self, request: RequestContext, response: ResponseContext) {
        self.attributes_mut().initialise(request, response);
    }

    fn is_initialised(&self) -> bool {
        self.attributes().is_initialised()
    }

    /// Fully qualified Rust type of the concrete handler.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn take_response(&mut self) -> ResponseContext {
        self.attributes_mut().take_response()
    }
}
