//! Common test fixtures for chart resolution tests.
//!
//! Filenames follow the shape of the JMA feed closely enough for the
//! resolver: an underscore-delimited `yyyyMMddHHmmss` token.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

/// Build a UTC instant from calendar fields. Panics on invalid input.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture date")
}

/// Analysis chart filename as listed in a manifest `now` array.
pub fn manifest_filename(area: &str, color: &str, instant: DateTime<Utc>) -> String {
    format!(
        "wmap_{}_{}_{}_ja.png",
        area,
        color,
        instant.format("%Y%m%d%H%M%S")
    )
}

/// Forecast chart filename as listed in `ft24`/`ft48`.
pub fn forecast_filename(area: &str, color: &str, horizon: u32, issued: DateTime<Utc>) -> String {
    format!(
        "fcst_{}_{}_ft{}_{}_ja.png",
        area,
        color,
        horizon,
        issued.format("%Y%m%d%H%M%S")
    )
}

fn group(area: &str, color: &str, cadence_hours: i64, latest: DateTime<Utc>) -> Value {
    let now: Vec<String> = (0..3)
        .rev()
        .map(|i| manifest_filename(area, color, latest - Duration::hours(cadence_hours * i)))
        .collect();

    json!({
        "now": now,
        "ft24": [forecast_filename(area, color, 24, latest)],
        "ft48": [forecast_filename(area, color, 48, latest)],
    })
}

/// A complete manifest whose newest analysis charts are at `latest`.
///
/// `near*` groups list SPAS charts 3 hours apart, `asia*` groups list ASAS
/// charts 6 hours apart, oldest first.
pub fn sample_manifest(latest: DateTime<Utc>) -> Value {
    json!({
        "near": group("SPAS", "COLOR", 3, latest),
        "near_monochrome": group("SPAS", "MONO", 3, latest),
        "asia": group("ASAS", "COLOR", 6, latest),
        "asia_monochrome": group("ASAS", "MONO", 6, latest),
    })
}

/// [`sample_manifest`] serialized as the `list.json` body.
pub fn sample_manifest_json(latest: DateTime<Utc>) -> String {
    sample_manifest(latest).to_string()
}
