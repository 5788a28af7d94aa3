//! Request handling and transformation.
//!
//! # Responsibilities
//! - Resolve the request ID (set by the request-id layer, generated otherwise)
//! - Decode query-string and form-body parameters
//! - Build the `RequestContext` handed to the dispatcher
//!
//! # Design Decisions
//! - Form bodies override query parameters of the same name
//! - Undecodable parameter sources are logged and skipped, not rejected;
//!   the handler decides whether a missing parameter matters

use axum::body::Bytes;
use axum::http::{header, request::Parts, HeaderMap};
use uuid::Uuid;

use crate::action::RequestContext;

pub const X_REQUEST_ID: &str = "x-request-id";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request ID from the `x-request-id` header, or a fresh UUID v4.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn decode_pairs(source: &'static str, encoded: &str) -> Vec<(String, String)> {
    match serde_urlencoded::from_str::<Vec<(String, String)>>(encoded) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!(source, error = %e, "Ignoring undecodable parameters");
            Vec::new()
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

/// Build the dispatcher's view of an HTTP request.
pub fn request_context(parts: &Parts, body: Bytes, request_id: String) -> RequestContext {
    let mut context = RequestContext::new(parts.uri.path())
        .with_request_id(request_id)
        .with_method(parts.method.clone())
        .with_headers(parts.headers.clone());

    if let Some(query) = parts.uri.query() {
        context = context.with_params(decode_pairs("query", query));
    }

    if is_form(&parts.headers) {
        match std::str::from_utf8(&body) {
            Ok(encoded) => context = context.with_params(decode_pairs("body", encoded)),
            Err(e) => tracing::debug!(error = %e, "Form body is not UTF-8"),
        }
    }

    context.with_body(body)
}
