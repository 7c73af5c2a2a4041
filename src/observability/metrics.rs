//! Metrics collection and exposition.
//!
//! # Metrics
//! - `alpha_requests_total` (counter): inbound requests by method, status
//! - `alpha_request_duration_seconds` (histogram): latency of ticker fetches
//! - `alpha_upstream_requests_total` (counter): upstream calls by outcome
//! - `alpha_upstream_duration_seconds` (histogram): upstream latency
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus
//! recorder.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "alpha_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("alpha_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a CORS preflight. Counted only: it never waits on anything, so
/// it stays out of the latency histogram.
pub fn record_preflight() {
    metrics::counter!(
        "alpha_requests_total",
        "method" => "OPTIONS",
        "status" => "200"
    )
    .increment(1);
}

/// Record one upstream call.
pub fn record_upstream(outcome: &'static str, start: Instant) {
    metrics::counter!("alpha_upstream_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("alpha_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}
