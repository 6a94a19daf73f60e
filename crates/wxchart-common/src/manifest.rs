//! The JMA weather map manifest (`list.json`).
//!
//! The manifest lists the most recently published charts for each of four
//! groups. Filenames in `now` are ordered oldest first.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::chart::{Area, ColorMode, Horizon};
use crate::error::{ChartError, ChartResult};

/// Default manifest location.
pub const DEFAULT_MANIFEST_URL: &str = "https://www.jma.go.jp/bosai/weather_map/data/list.json";

/// Default prefix under which manifest filenames are served as PNG.
pub const DEFAULT_MANIFEST_PNG_BASE: &str = "https://www.jma.go.jp/bosai/weather_map/data/png/";

/// Chart filenames for one area/color combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestGroup {
    /// Analysis charts, most recent last.
    #[serde(default)]
    pub now: Vec<String>,
    /// 24 hour forecast chart.
    #[serde(default, deserialize_with = "one_or_many")]
    pub ft24: Vec<String>,
    /// 48 hour forecast chart.
    #[serde(default, deserialize_with = "one_or_many")]
    pub ft48: Vec<String>,
}

impl ManifestGroup {
    /// Most recently published analysis chart.
    pub fn latest_now(&self) -> ChartResult<&str> {
        self.now
            .last()
            .map(String::as_str)
            .ok_or_else(|| ChartError::MalformedManifestEntry("no analysis charts listed".into()))
    }

    /// First listed forecast chart for the horizon.
    pub fn forecast(&self, horizon: Horizon) -> ChartResult<&str> {
        let entries = match horizon {
            Horizon::Hours24 => &self.ft24,
            Horizon::Hours48 => &self.ft48,
        };
        entries.first().map(String::as_str).ok_or_else(|| {
            ChartError::MalformedManifestEntry(format!(
                "no {}h forecast chart listed",
                horizon.hours()
            ))
        })
    }
}

/// Parsed `list.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Around Japan, color.
    pub near: ManifestGroup,
    /// Around Japan, monochrome.
    pub near_monochrome: ManifestGroup,
    /// Asia, color.
    pub asia: ManifestGroup,
    /// Asia, monochrome.
    pub asia_monochrome: ManifestGroup,
}

impl Manifest {
    pub fn from_json(body: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Select the group listing charts for an area and color mode.
    pub fn group(&self, area: Area, color: ColorMode) -> &ManifestGroup {
        match (area, color) {
            (Area::SecondarySurface, ColorMode::Color) => &self.near,
            (Area::SecondarySurface, ColorMode::Monochrome) => &self.near_monochrome,
            (Area::PrimarySurface, ColorMode::Color) => &self.asia,
            (Area::PrimarySurface, ColorMode::Monochrome) => &self.asia_monochrome,
        }
    }
}

/// Extract the nominal observation time from a manifest filename.
///
/// Looks for the first 14-digit `yyyyMMddHHmmss` token delimited by
/// underscores on both sides. Returns `None` if there is no such token or the
/// digits do not form a valid date and time.
pub fn slot_from_filename(filename: &str) -> Option<DateTime<Utc>> {
    let segments: Vec<&str> = filename.split('_').collect();
    if segments.len() < 3 {
        return None;
    }

    let token = segments[1..segments.len() - 1]
        .iter()
        .copied()
        .find(|s| s.len() == 14 && s.bytes().all(|b| b.is_ascii_digit()))?;

    let field = |range: std::ops::Range<usize>| token[range].parse::<u32>().ok();
    let year = token[0..4].parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)
        .and_then(|d| d.and_hms_opt(field(8..10)?, field(10..12)?, field(12..14)?))
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Accept either `"name.png"` or `["name.png", ...]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
