//! Prometheus metrics exporter.
//!
//! Uses the metrics-rs facade with the Prometheus exporter. The exporter
//! runs its own HTTP listener on a dedicated port, started once at boot and
//! never joined or awaited by request handling. Recording is a no-op until
//! a recorder is installed, so `record_request` is safe to call
//! unconditionally.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and start its scrape listener.
///
/// Only one recorder can be installed per process; a second call returns an
/// error.
pub fn install_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    metrics::describe_counter!(
        "http_requests_total",
        "Total HTTP requests served, by route template and status code"
    );

    tracing::info!(%addr, "prometheus exporter listening");
    Ok(())
}

/// Count one served request against its route template and response status.
pub fn record_request(route: &str, status: u16) {
    metrics::counter!(
        "http_requests_total",
        "route" => route.to_owned(),
        "status" => status.to_string()
    )
    .increment(1);
}
