//! Application state shared by the handlers.

use std::sync::Arc;

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use wxchart_common::PathResolver;

use crate::clock::{Clock, SystemClock};
use crate::config::RedirectConfig;
use crate::upstream::{ChartProbe, JmaClient, ManifestSource};

/// Shared application state. Holds no per-request data.
pub struct AppState {
    pub config: RedirectConfig,

    /// Builds archive URLs against `config.chart_base`.
    pub resolver: PathResolver,

    pub manifest: Arc<dyn ManifestSource>,
    pub probe: Arc<dyn ChartProbe>,
    pub clock: Arc<dyn Clock>,

    /// Present when the Prometheus recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state talking to the real upstream hosts.
    pub fn new(config: RedirectConfig, prometheus: Option<PrometheusHandle>) -> Result<Self> {
        let client = Arc::new(JmaClient::new(&config)?);
        let mut state = Self::with_upstream(config, client.clone(), client, Arc::new(SystemClock));
        state.prometheus = prometheus;
        Ok(state)
    }

    /// Create state with explicit upstream seams and clock.
    pub fn with_upstream(
        config: RedirectConfig,
        manifest: Arc<dyn ManifestSource>,
        probe: Arc<dyn ChartProbe>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver: PathResolver::new(config.chart_base.clone()),
            config,
            manifest,
            probe,
            clock,
            prometheus: None,
        }
    }
}
