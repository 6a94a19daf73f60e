//! Prometheus counters for redirects, probes and manifest reads.
//!
//! Recording is a no-op until [`install_recorder`] has run, so library code
//! and tests can call these freely.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

pub fn record_redirect(route: &'static str) {
    counter!("wxchart_redirects_total", "route" => route).increment(1);
}

pub fn record_error(kind: &'static str) {
    counter!("wxchart_redirect_errors_total", "kind" => kind).increment(1);
}

pub fn record_probe(found: bool) {
    let outcome = if found { "found" } else { "missing" };
    counter!("wxchart_probes_total", "outcome" => outcome).increment(1);
}

pub fn record_manifest_fetch(outcome: &'static str) {
    counter!("wxchart_manifest_fetches_total", "outcome" => outcome).increment(1);
}
