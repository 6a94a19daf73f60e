//! wxchart-redirect server
//!
//! Redirects stable URLs to the current or archived JMA weather charts.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use wxchart_redirect::config::RedirectConfig;
use wxchart_redirect::metrics;
use wxchart_redirect::router::create_router;
use wxchart_redirect::state::AppState;

/// JMA weather chart redirect server
#[derive(Parser, Debug)]
#[command(name = "wxchart-redirect")]
#[command(about = "Redirects stable URLs to JMA weather charts")]
struct Args {
    /// Listen address
    #[arg(short, long, env = "WXCHART_LISTEN")]
    listen: Option<String>,

    /// YAML configuration file
    #[arg(short, long, env = "WXCHART_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Probes per past-day request
    #[arg(long, env = "WXCHART_PROBE_ATTEMPTS")]
    probe_attempts: Option<u32>,

    /// Cache-Control max-age on redirects, in seconds
    #[arg(long, env = "WXCHART_CACHE_MAX_AGE")]
    cache_max_age: Option<u64>,

    /// Do not install the Prometheus recorder
    #[arg(long, env = "WXCHART_NO_METRICS")]
    no_metrics: bool,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<RedirectConfig> {
        let mut config = match &self.config {
            Some(path) => RedirectConfig::load(path)?,
            None => RedirectConfig::default(),
        };

        if let Some(listen) = &self.listen {
            config.listen = listen.clone();
        }
        if let Some(attempts) = self.probe_attempts {
            config.probe_attempts = attempts;
        }
        if let Some(max_age) = self.cache_max_age {
            config.cache_max_age_secs = max_age;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let config = args.load_config()?;
    info!(
        listen = %config.listen,
        manifest_url = %config.manifest_url,
        chart_base = %config.chart_base,
        probe_attempts = config.probe_attempts,
        "Starting wxchart-redirect"
    );

    let prometheus = if args.no_metrics {
        None
    } else {
        match metrics::install_recorder() {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "Failed to install metrics recorder");
                None
            }
        }
    };

    let listen = config.listen.clone();
    let state = Arc::new(AppState::new(config, prometheus)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind {}", listen))?;
    info!("Listening on {}", listen);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
