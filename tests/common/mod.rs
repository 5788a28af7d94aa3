//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use automated_dispatch::config::ServiceConfig;
use automated_dispatch::http::HttpServer;
use automated_dispatch::lifecycle::Shutdown;
use automated_dispatch::registry::Registry;
use automated_dispatch::routes::default_registry;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Router over the default registry with default config.
pub fn default_router() -> Router {
    router_with(ServiceConfig::default(), default_registry())
}

pub fn router_with(config: ServiceConfig, registry: Registry) -> Router {
    HttpServer::new(config, Arc::new(registry)).router()
}

/// Drive one request through the router in-process.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// A server bound to an ephemeral local port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn start_server(config: ServiceConfig, registry: Registry) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, Arc::new(registry));
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
    RunningServer {
        addr,
        shutdown,
        handle,
    }
}
