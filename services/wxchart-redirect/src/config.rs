//! Service configuration.
//!
//! Defaults target the public JMA hosts. A YAML file can override any field;
//! command line flags and environment variables are applied on top by the
//! binary.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wxchart_common::manifest::{DEFAULT_MANIFEST_PNG_BASE, DEFAULT_MANIFEST_URL};
use wxchart_common::path::DEFAULT_CHART_BASE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Listen address
    pub listen: String,
    /// Location of `list.json`
    pub manifest_url: String,
    /// Prefix for forecast chart filenames taken from the manifest
    pub manifest_png_base: String,
    /// Archive host prefix, up to but excluding `/wxchart/quick`
    pub chart_base: String,
    /// Probes per past-day request before giving up
    pub probe_attempts: u32,
    /// `Cache-Control: max-age` on redirects
    pub cache_max_age_secs: u64,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            manifest_png_base: DEFAULT_MANIFEST_PNG_BASE.to_string(),
            chart_base: DEFAULT_CHART_BASE.to_string(),
            probe_attempts: 3,
            cache_max_age_secs: 60,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl RedirectConfig {
    /// Load configuration from a YAML file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RedirectConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded redirect config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.probe_attempts == 0 {
            bail!("probe_attempts must be at least 1");
        }
        for (name, url) in [
            ("manifest_url", &self.manifest_url),
            ("manifest_png_base", &self.manifest_png_base),
            ("chart_base", &self.chart_base),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("{} must be an http(s) URL, got {:?}", name, url);
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Full URL of a forecast chart listed in the manifest.
    pub fn manifest_png_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.manifest_png_base.trim_end_matches('/'),
            filename
        )
    }
}
