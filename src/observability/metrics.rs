//! Metrics collection and exposition.
//!
//! # Metrics
//! - `minter_pins_total` (counter): pin attempts by kind, outcome
//! - `minter_mints_total` (counter): mint attempts by network, outcome
//! - `minter_gas_fallback_total` (counter): estimates replaced by the default limit
//! - `minter_mint_duration_seconds` (histogram): full pipeline latency
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "success"
    } else {
        "failure"
    }
}

pub fn record_pin(kind: &'static str, ok: bool) {
    metrics::counter!("minter_pins_total", "kind" => kind, "outcome" => outcome(ok)).increment(1);
}

pub fn record_mint(network: &str, ok: bool, start: Instant) {
    let network = network.to_string();
    metrics::counter!("minter_mints_total", "network" => network.clone(), "outcome" => outcome(ok))
        .increment(1);
    metrics::histogram!("minter_mint_duration_seconds", "network" => network)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_gas_fallback() {
    metrics::counter!("minter_gas_fallback_total").increment(1);
}
