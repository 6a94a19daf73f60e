//! UTC timestamp tokens and publication slot handling.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::chart::Area;

/// `yyyyMM` in UTC, e.g. `202306`.
pub fn year_month(instant: &DateTime<Utc>) -> String {
    format!("{:04}{:02}", instant.year(), instant.month())
}

/// `yyyyMMddHHmm` in UTC, e.g. `202306151200`.
pub fn full_timestamp(instant: &DateTime<Utc>) -> String {
    format!(
        "{}{:02}{:02}{:02}",
        year_month(instant),
        instant.day(),
        instant.hour(),
        instant.minute()
    )
}

/// A UTC instant aligned to a chart series' publication cadence.
///
/// Always on minute zero, on the same UTC date as the instant it was
/// snapped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicationSlot {
    area: Area,
    instant: DateTime<Utc>,
}

impl PublicationSlot {
    /// Snap an arbitrary instant down to the slot that covers it.
    pub fn snap(area: Area, instant: DateTime<Utc>) -> Self {
        let hour = instant.hour();
        let offset = Duration::hours(i64::from(hour - area.slot_hour(hour)))
            + Duration::minutes(i64::from(instant.minute()))
            + Duration::seconds(i64::from(instant.second()))
            + Duration::nanoseconds(i64::from(instant.nanosecond()));

        // The offset never exceeds the time of day, so the result stays at or
        // after midnight of a representable date.
        Self {
            area,
            instant: instant - offset,
        }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// `yyyyMMddHHmm` token used in archived filenames.
    pub fn timestamp_token(&self) -> String {
        full_timestamp(&self.instant)
    }
}
