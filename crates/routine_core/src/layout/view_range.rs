//! Visible hour span computation.
//!
//! The span starts from the configured defaults, widens to whole hours
//! around every event, and finally widens to cover every zone.

use crate::config::TimelineConfig;
use crate::model::event::Event;
use crate::time::END_OF_DAY;
use serde::{Deserialize, Serialize};

/// Inclusive integer hour bounds of the displayed axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRange {
    pub start: i32,
    pub end: i32,
}

impl ViewRange {
    /// Number of hour rows between the bounds.
    pub fn hours(&self) -> i32 {
        self.end.saturating_sub(self.start)
    }
}

/// Computes the view range for a set of events.
///
/// Malformed event times decode to `0` and may widen the start down to
/// midnight; this is accepted behavior. Event hours outside the day are
/// clamped to `0..=24`.
pub fn compute_view_range(events: &[Event], config: &TimelineConfig) -> ViewRange {
    let mut min = config.default_start;
    let mut max = config.default_end;

    for event in events {
        let (start, end) = event.decoded_span();
        let (start, end) = (start.clamp(0.0, END_OF_DAY), end.clamp(0.0, END_OF_DAY));
        if start < f64::from(min) {
            min = start.floor() as i32;
        }
        if end > f64::from(max) {
            max = end.ceil() as i32;
        }
    }

    if let Some(zone_start) = config.lowest_zone_start() {
        min = min.min(zone_start.floor() as i32);
    }
    if let Some(zone_end) = config.highest_zone_end() {
        max = max.max(zone_end.ceil() as i32);
    }

    ViewRange {
        start: min,
        end: max,
    }
}
