//! HTTP request handlers.

pub mod archive;
pub mod forecast;
pub mod health;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

/// Query parameters accepted by every chart route.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    /// `color` (default) or `mono`.
    pub color: Option<String>,
}

/// 301 to the resolved upstream chart.
pub(crate) fn redirect(location: String, max_age_secs: u64) -> Response {
    info!(location = %location, "Go to \"{}\"", location);
    (
        StatusCode::MOVED_PERMANENTLY,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, format!("max-age={}", max_age_secs)),
        ],
    )
        .into_response()
}
