//! Archived analysis chart redirects.
//!
//! `today` takes the newest chart listed in the manifest and rebuilds its
//! canonical archive path. Past days are found by probing computed paths.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::Uri,
    response::Response,
};
use tracing::{debug, info, instrument, warn};
use wxchart_common::{slot_from_filename, Area, ChartError, ChartSpec};

use super::{redirect, ChartQuery};
use crate::error::ApiError;
use crate::metrics;
use crate::search::find_latest;
use crate::selector::{parse_archive_file, parse_color, DaySelector};
use crate::state::AppState;

/// GET /jma/weather-map/archives/:file
pub async fn archive_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(file): Path<String>,
    Query(query): Query<ChartQuery>,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("Access to \"{}\"", uri.path());
    resolve_archive(&state, None, &file, &query).await
}

/// GET /jma/weather-map/archives/:area/:file
pub async fn area_archive_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((area, file)): Path<(String, String)>,
    Query(query): Query<ChartQuery>,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("Access to \"{}\"", uri.path());
    resolve_archive(&state, Some(&area), &file, &query).await
}

#[instrument(skip(state, query))]
async fn resolve_archive(
    state: &AppState,
    area: Option<&str>,
    file: &str,
    query: &ChartQuery,
) -> Result<Response, ApiError> {
    let area: Area = area.map_or(Ok(Area::default()), |a| a.parse())?;
    let (selector, extension) = parse_archive_file(file)?;
    let color = parse_color(query.color.as_deref())?;
    let spec = ChartSpec::new(area, extension, color);

    debug!(route = "archive", area = %area, selector = ?selector, "Resolving archived chart");

    let location = match selector {
        DaySelector::Today => {
            let manifest = state.manifest.fetch_manifest().await?;
            let latest = manifest.group(area, color).latest_now()?;
            let issued = slot_from_filename(latest).ok_or_else(|| {
                warn!(filename = %latest, "Manifest entry has no timestamp");
                ChartError::MalformedManifestEntry(format!("no timestamp in {:?}", latest))
            })?;
            metrics::record_redirect("archive_today");
            state.resolver.resolve(&spec, issued)
        }
        DaySelector::DaysAgo(_) => {
            let start = selector.start_instant(state.clock.now())?;
            let found = find_latest(
                state.probe.as_ref(),
                &state.resolver,
                &spec,
                start,
                state.config.probe_attempts,
            )
            .await?;
            metrics::record_redirect("archive_probe");
            found
        }
    };

    Ok(redirect(location, state.config.cache_max_age_secs))
}
