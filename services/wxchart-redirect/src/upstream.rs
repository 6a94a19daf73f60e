//! Outbound calls to the JMA hosts.
//!
//! Two seams, so handlers and the probe search can be exercised without a
//! network:
//! - [`ManifestSource`] reads `list.json` once per request
//! - [`ChartProbe`] checks whether a computed archive URL exists

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use wxchart_common::{ChartError, ChartResult, Manifest};

use crate::config::RedirectConfig;
use crate::metrics;

#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch and parse the manifest. Not retried.
    async fn fetch_manifest(&self) -> ChartResult<Manifest>;
}

#[async_trait]
pub trait ChartProbe: Send + Sync {
    /// `true` if the URL answers with a 2xx status. Transport errors count
    /// as a miss.
    async fn exists(&self, url: &str) -> bool;
}

/// reqwest-backed client for both the manifest host and the archive host.
#[derive(Debug, Clone)]
pub struct JmaClient {
    client: Client,
    manifest_url: String,
}

impl JmaClient {
    pub fn new(config: &RedirectConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            manifest_url: config.manifest_url.clone(),
        })
    }
}

#[async_trait]
impl ManifestSource for JmaClient {
    #[instrument(skip(self), fields(url = %self.manifest_url))]
    async fn fetch_manifest(&self) -> ChartResult<Manifest> {
        let response = match self.client.get(&self.manifest_url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Manifest request failed");
                metrics::record_manifest_fetch("unreachable");
                return Err(ChartError::UpstreamUnreachable(e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to read manifest body");
                metrics::record_manifest_fetch("unreachable");
                return Err(ChartError::UpstreamUnreachable(e.to_string()));
            }
        };

        if !status.is_success() {
            warn!(status = status.as_u16(), "Manifest host returned an error");
            metrics::record_manifest_fetch("error_status");
            return Err(ChartError::UpstreamUnavailable {
                status: status.as_u16(),
                body,
            });
        }

        let manifest = Manifest::from_json(&body).inspect_err(|e| {
            warn!(error = %e, "Manifest did not parse");
            metrics::record_manifest_fetch("malformed");
        })?;

        metrics::record_manifest_fetch("ok");
        debug!("Fetched manifest");
        Ok(manifest)
    }
}

#[async_trait]
impl ChartProbe for JmaClient {
    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(url = %url, error = %e, "Probe request failed");
                false
            }
        }
    }
}
