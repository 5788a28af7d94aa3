//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a single catch-all dispatch handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Enforce the request body limit
//! - Dispatch requests through the handler registry and execute the handler
//! - Record per-request metrics

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::action::ResponseContext;
use crate::config::ServiceConfig;
use crate::http::{request, response};
use crate::lifecycle::shutdown;
use crate::observability::metrics::{self, DispatchOutcome, UNMATCHED_ROUTE};
use crate::registry::{DispatchError, Registry, RouteIdentifier};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub max_body_bytes: usize,
}

/// HTTP front end for the automated-action registry.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    registry: Arc<Registry>,
}

impl HttpServer {
    /// Create a new HTTP server serving `registry`.
    pub fn new(config: ServiceConfig, registry: Arc<Registry>) -> Self {
        let state = AppState {
            registry: registry.clone(),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            registry,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.registry.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Catch-all handler: every path is resolved against the registry.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let (parts, body) = request.into_parts();
    let request_id = request::request_id(&parts.headers);

    let identifier = RouteIdentifier::from_path(parts.uri.path());
    let route_label = if state.registry.contains(identifier.as_str()) {
        identifier.as_str()
    } else {
        UNMATCHED_ROUTE
    };

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri.path(),
        route = %identifier,
        "Dispatching request"
    );

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Request body rejected");
            let status = StatusCode::PAYLOAD_TOO_LARGE;
            metrics::record_dispatch(route_label, DispatchOutcome::BodyRejected, status.as_u16(), start_time);
            return response::error_response(status, "Request body too large", &request_id);
        }
    };

    let context = request::request_context(&parts, body, request_id.clone());
    let mut action = match state.registry.dispatch(context, ResponseContext::default()) {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                path = %parts.uri.path(),
                kind = err.kind(),
                error = %err,
                "Dispatch failed"
            );
            let outcome = match &err {
                DispatchError::RouteNotFound { .. } => DispatchOutcome::RouteNotFound,
                DispatchError::HandlerInstantiation { .. } => DispatchOutcome::InstantiationFailed,
            };
            let response = response::dispatch_error_response(&err, &request_id);
            metrics::record_dispatch(route_label, outcome, response.status().as_u16(), start_time);
            return response;
        }
    };

    match action.execute() {
        Ok(()) => {
            let response = action.take_response().into_response();
            tracing::debug!(
                request_id = %request_id,
                action = action.name(),
                status = %response.status(),
                "Action completed"
            );
            metrics::record_dispatch(route_label, DispatchOutcome::Completed, response.status().as_u16(), start_time);
            response
        }
        Err(err) => {
            let outcome = if err.is_client_error() {
                tracing::warn!(request_id = %request_id, action = action.name(), error = %err, "Action rejected request");
                DispatchOutcome::ActionRejected
            } else {
                tracing::error!(request_id = %request_id, action = action.name(), error = %err, "Action failed");
                DispatchOutcome::ActionFailed
            };
            let response = response::action_error_response(&err, &request_id);
            metrics::record_dispatch(route_label, outcome, response.status().as_u16(), start_time);
            response
        }
    }
}
