//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dispatch_requests_total` (counter): requests by route, outcome, status
//! - `dispatch_request_duration_seconds` (histogram): latency by outcome

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for paths with no registry entry.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Final state of one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed,
    RouteNotFound,
    InstantiationFailed,
    ActionRejected,
    ActionFailed,
    BodyRejected,
}

impl DispatchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchOutcome::Completed => "completed",
            DispatchOutcome::RouteNotFound => "route_not_found",
            DispatchOutcome::InstantiationFailed => "instantiation_failed",
            DispatchOutcome::ActionRejected => "action_rejected",
            DispatchOutcome::ActionFailed => "action_failed",
            DispatchOutcome::BodyRejected => "body_rejected",
        }
    }
}

/// Install the Prometheus exporter with an HTTP listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one dispatched request.
pub fn record_dispatch(route: &str, outcome: DispatchOutcome, status: u16, start: Instant) {
    counter!(
        "dispatch_requests_total",
        "route" => route.to_string(),
        "outcome" => outcome.as_str(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "dispatch_request_duration_seconds",
        "outcome" => outcome.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}
