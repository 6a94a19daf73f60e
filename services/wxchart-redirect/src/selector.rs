//! Parsing of the filename segment of chart routes.
//!
//! Archive routes take `{selector}.{ext}` where the selector is `today`,
//! `yesterday` or `<n>daysago`. Forecast routes take `{24|48}.png`.

use std::str::FromStr;

use chrono::{DateTime, Days, Utc};
use wxchart_common::{ChartError, ChartResult, ColorMode, Extension, Horizon};

pub const UNMATCHED_ROUTE: &str = "unvalid URL pattern";

const SELECTOR_HINT: &str = r#"Available filename are ["today", "yesterday","/^\d+daysago$/"]"#;
const PROBE_EXTENSION_HINT: &str = r#"Available extension are "png", "svg" and "svgz""#;

/// Which day an archive request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    /// Latest chart listed in the manifest.
    Today,
    /// Whole UTC days before now. `yesterday` is `DaysAgo(1)`.
    DaysAgo(u64),
}

impl DaySelector {
    /// Shift `now` back by whole days, keeping the time of day.
    pub fn start_instant(&self, now: DateTime<Utc>) -> ChartResult<DateTime<Utc>> {
        match self {
            DaySelector::Today => Ok(now),
            DaySelector::DaysAgo(days) => now
                .checked_sub_days(Days::new(*days))
                .ok_or_else(|| ChartError::invalid_input("Requested day is out of range")),
        }
    }

    /// Whether the request is answered from the manifest instead of probing.
    pub fn uses_manifest(&self) -> bool {
        matches!(self, DaySelector::Today)
    }
}

impl FromStr for DaySelector {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DaySelector::Today),
            "yesterday" => Ok(DaySelector::DaysAgo(1)),
            _ => {
                let digits = s
                    .strip_suffix("daysago")
                    .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
                    .ok_or_else(|| ChartError::invalid_input(SELECTOR_HINT))?;
                // A count too large for u64 falls back to zero days.
                Ok(DaySelector::DaysAgo(digits.parse().unwrap_or(0)))
            }
        }
    }
}

/// Split `name.ext`. Exactly one dot, with text on both sides.
pub fn split_filename(file: &str) -> ChartResult<(&str, &str)> {
    file.split_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty() && !ext.contains('.'))
        .ok_or_else(|| ChartError::invalid_input(UNMATCHED_ROUTE))
}

/// Parse and validate an archive request's `{selector}.{ext}`.
///
/// PDF is only served for `today`, which is resolved through the manifest.
pub fn parse_archive_file(file: &str) -> ChartResult<(DaySelector, Extension)> {
    let (stem, ext) = split_filename(file)?;
    let selector: DaySelector = stem.parse()?;

    match ext.parse::<Extension>() {
        Ok(Extension::Pdf) | Err(_) if !selector.uses_manifest() => {
            Err(ChartError::invalid_input(PROBE_EXTENSION_HINT))
        }
        Ok(extension) => Ok((selector, extension)),
        Err(e) => Err(e),
    }
}

/// Parse a forecast request's `{24|48}.png`.
pub fn parse_forecast_file(file: &str) -> ChartResult<Horizon> {
    let (stem, ext) = split_filename(file)?;
    if ext != "png" {
        return Err(ChartError::invalid_input(UNMATCHED_ROUTE));
    }
    stem.parse()
}

/// Parse the optional `color` query parameter.
pub fn parse_color(color: Option<&str>) -> ChartResult<ColorMode> {
    color.map_or(Ok(ColorMode::Color), |c| c.parse())
}
