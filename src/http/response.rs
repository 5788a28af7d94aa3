//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn a handler's `ResponseContext` into an Axum response
//! - Map dispatch and action errors to HTTP status codes
//!
//! # Design Decisions
//! - Error bodies are JSON: `{"error": ..., "request_id": ...}`
//! - Handler instantiation failures are reported as a generic 500; the
//!   cause is logged, never sent to the client

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::action::{ActionError, ResponseContext};
use crate::registry::DispatchError;

impl IntoResponse for ResponseContext {
    fn into_response(self) -> Response {
        let (status, headers, body) = self.into_parts();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        response.headers_mut().extend(headers);
        response
    }
}

/// Status code for a dispatch failure.
pub fn dispatch_status(err: &DispatchError) -> StatusCode {
    match err {
        DispatchError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        DispatchError::HandlerInstantiation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status code for a failed `execute`.
pub fn action_status(err: &ActionError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// JSON error body with the given status.
pub fn error_response(status: StatusCode, message: &str, request_id: &str) -> Response {
    (
        status,
        Json(json!({ "error": message, "request_id": request_id })),
    )
        .into_response()
}

pub fn dispatch_error_response(err: &DispatchError, request_id: &str) -> Response {
    let status = dispatch_status(err);
    match err {
        DispatchError::RouteNotFound { .. } => error_response(status, &err.to_string(), request_id),
        DispatchError::HandlerInstantiation { .. } => {
            error_response(status, "Internal server error", request_id)
        }
    }
}

pub fn action_error_response(err: &ActionError, request_id: &str) -> Response {
    let status = action_status(err);
    if err.is_client_error() {
        error_response(status, &err.to_string(), request_id)
    } else {
        error_response(status, "Internal server error", request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ConstructionError, RouteIdentifier};
    use axum::http::header;

    #[test]
    fn test_response_context_into_response() {
        let mut ctx = ResponseContext::new();
        ctx.set_status(StatusCode::ACCEPTED);
        ctx.write_json(&json!({ "ok": true })).unwrap();

        let response = ctx.into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_dispatch_status_mapping() {
        let not_found = DispatchError::RouteNotFound {
            identifier: RouteIdentifier::new("/nope"),
        };
        let unmapped = DispatchError::HandlerInstantiation {
            identifier: RouteIdentifier::new("/auto/emailWorker"),
            source: ConstructionError::Unmapped,
        };
        assert_eq!(dispatch_status(&not_found), StatusCode::NOT_FOUND);
        assert_eq!(dispatch_status(&unmapped), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_action_status_mapping() {
        let missing = ActionError::MissingParameter {
            name: "courseid".to_string(),
        };
        let failed = ActionError::Failed("boom".to_string());
        assert_eq!(action_status(&missing), StatusCode::BAD_REQUEST);
        assert_eq!(action_status(&failed), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
