//! Dispatch failures.

use thiserror::Error;

use crate::registry::identifier::RouteIdentifier;

/// Why a handler could not be constructed.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The route is registered but deliberately wired to no handler.
    #[error("no handler is mapped to this route")]
    Unmapped,

    /// The factory reported a failure.
    #[error("{handler} could not be constructed: {reason}")]
    Failed {
        handler: &'static str,
        reason: String,
    },

    /// The factory panicked.
    #[error("{handler} panicked during construction: {message}")]
    Panicked {
        handler: &'static str,
        message: String,
    },
}

/// Terminal failure of a dispatch call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registry entry for the normalized identifier.
    #[error("Page not found for {identifier}")]
    RouteNotFound { identifier: RouteIdentifier },

    /// The identifier resolved but the handler could not be built.
    #[error("Could not create the action for {identifier}: {source}")]
    HandlerInstantiation {
        identifier: RouteIdentifier,
        source: ConstructionError,
    },
}

impl DispatchError {
    /// The normalized identifier the dispatch was for.
    pub fn identifier(&self) -> &RouteIdentifier {
        match self {
            DispatchError::RouteNotFound { identifier }
            | DispatchError::HandlerInstantiation { identifier, .. } => identifier,
        }
    }

    /// Instantiation failures point at a configuration or packaging defect.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DispatchError::HandlerInstantiation { .. })
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::RouteNotFound { .. } => "route_not_found",
            DispatchError::HandlerInstantiation { .. } => "handler_instantiation",
        }
    }
}
