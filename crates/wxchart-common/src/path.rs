//! Archived chart URL construction.

use chrono::{DateTime, Utc};

use crate::chart::{Area, ChartSpec, ColorMode, Extension};
use crate::time::{year_month, PublicationSlot};

/// Default host and prefix for archived charts.
pub const DEFAULT_CHART_BASE: &str = "https://www.data.jma.go.jp/fcd/yoho/data";

/// Builds archive URLs of the form
/// `{base}/wxchart/quick/{yyyyMM}/{AREA}_{COLOR}_{yyyyMMddHHmm}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base: String,
}

impl PathResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Snap `instant` to the series' publication slot and build its URL.
    pub fn resolve(&self, spec: &ChartSpec, instant: DateTime<Utc>) -> String {
        self.resolve_slot(spec, PublicationSlot::snap(spec.area, instant))
    }

    /// Build the URL for an already snapped slot.
    pub fn resolve_slot(&self, spec: &ChartSpec, slot: PublicationSlot) -> String {
        let instant = slot.instant();
        format!(
            "{}/wxchart/quick/{}/{}_{}_{}.{}",
            self.base,
            year_month(&instant),
            spec.area.code(),
            spec.color.token(),
            slot.timestamp_token(),
            spec.extension.file_extension()
        )
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_BASE)
    }
}

/// Resolve against the default archive host.
pub fn resolve_path(
    area: Area,
    extension: Extension,
    color: ColorMode,
    instant: DateTime<Utc>,
) -> String {
    PathResolver::default().resolve(&ChartSpec::new(area, extension, color), instant)
}
