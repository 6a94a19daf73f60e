//! Probe-and-fallback search for archived charts.
//!
//! Charts are not always published exactly on their cadence boundary, so a
//! computed path can miss. The search resolves the path for the start
//! instant, then moves the instant back one cadence step at a time and
//! resolves again until a probe succeeds or the attempt budget is spent.
//! Each step moves the raw instant, not the snapped slot, so for SPAS the
//! 15:00 override can yield the same candidate twice. Probes run one after
//! another; the first hit ends the search.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use wxchart_common::{ChartError, ChartResult, ChartSpec, PathResolver};

use crate::metrics;
use crate::upstream::ChartProbe;

/// Find the most recent existing chart at or before `start`.
pub async fn find_latest<P>(
    probe: &P,
    resolver: &PathResolver,
    spec: &ChartSpec,
    start: DateTime<Utc>,
    max_attempts: u32,
) -> ChartResult<String>
where
    P: ChartProbe + ?Sized,
{
    let cadence = Duration::hours(i64::from(spec.area.cadence_hours()));
    let mut current = start;

    for attempt in 1..=max_attempts {
        let candidate = resolver.resolve(spec, current);
        let found = probe.exists(&candidate).await;
        metrics::record_probe(found);

        debug!(
            url = %candidate,
            attempt = attempt,
            found = found,
            "Check \"{}\"...{}",
            candidate,
            if found { "found" } else { "not found" }
        );

        if found {
            return Ok(candidate);
        }
        if attempt == max_attempts {
            break;
        }
        match current.checked_sub_signed(cadence) {
            Some(earlier) => current = earlier,
            None => {
                debug!(current = %current, "Search reached the earliest representable date");
                break;
            }
        }
    }

    info!(
        area = %spec.area,
        start = %start,
        attempts = max_attempts,
        "No archived chart found"
    );
    Err(ChartError::NotFound)
}
