//! Forecast chart redirects, answered from the manifest.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::Uri,
    response::Response,
};
use tracing::{debug, info, instrument};
use wxchart_common::Area;

use super::{redirect, ChartQuery};
use crate::error::ApiError;
use crate::metrics;
use crate::selector::{parse_color, parse_forecast_file};
use crate::state::AppState;

/// GET /jma/weather-map/forecast/:file
pub async fn forecast_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(file): Path<String>,
    Query(query): Query<ChartQuery>,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("Access to \"{}\"", uri.path());
    resolve_forecast(&state, None, &file, &query).await
}

/// GET /jma/weather-map/forecast/:area/:file
pub async fn area_forecast_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((area, file)): Path<(String, String)>,
    Query(query): Query<ChartQuery>,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("Access to \"{}\"", uri.path());
    resolve_forecast(&state, Some(&area), &file, &query).await
}

#[instrument(skip(state, query))]
async fn resolve_forecast(
    state: &AppState,
    area: Option<&str>,
    file: &str,
    query: &ChartQuery,
) -> Result<Response, ApiError> {
    let area: Area = area.map_or(Ok(Area::default()), |a| a.parse())?;
    let horizon = parse_forecast_file(file)?;
    let color = parse_color(query.color.as_deref())?;

    debug!(
        route = "forecast",
        area = %area,
        horizon = horizon.hours(),
        "Resolving forecast chart"
    );

    let manifest = state.manifest.fetch_manifest().await?;
    let filename = manifest.group(area, color).forecast(horizon)?;
    let location = state.config.manifest_png_url(filename);

    metrics::record_redirect("forecast");
    Ok(redirect(location, state.config.cache_max_age_secs))
}
