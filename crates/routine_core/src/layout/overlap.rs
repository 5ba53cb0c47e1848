//! Overlap layout engine.
//!
//! # Responsibility
//! - Normalize events into decimal-hour intervals.
//! - Greedily pack intervals into lanes so that no lane holds two
//!   overlapping intervals.
//! - Resolve each event's width from the lanes of the events it directly
//!   overlaps.
//!
//! # Invariants
//! - Two intervals in the same lane never overlap (within `LANE_EPSILON`).
//! - Output has one record per input event, in processing order.
//! - `0 < width_percent <= 100` and `left_percent + width_percent <= 100`.
//!
//! Overlap groups are pairwise, not transitive: an event's width depends only
//! on the events it intersects itself. Two events that share a long common
//! neighbour therefore both render at the neighbour's split width even when
//! they do not touch each other.

use crate::model::event::Event;
use crate::time::DecimalHour;

/// Tolerance for treating back-to-back events as non-overlapping in lane
/// packing.
pub const LANE_EPSILON: DecimalHour = 0.01;

/// Decoded event time span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<'a> {
    pub event: &'a Event,
    pub start: DecimalHour,
    pub end: DecimalHour,
    pub duration: DecimalHour,
}

impl<'a> Interval<'a> {
    /// Decodes an event, applying the midnight wraparound rule.
    pub fn from_event(event: &'a Event) -> Self {
        let (start, end) = event.decoded_span();
        Self {
            event,
            start,
            end,
            duration: end - start,
        }
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval<'_>) -> bool {
        !(other.end <= self.start || other.start >= self.end)
    }
}

/// Placement of one event, in hours relative to the view start plus
/// percentage-based horizontal position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry<'a> {
    pub event: &'a Event,
    pub lane: usize,
    pub top: DecimalHour,
    pub height: DecimalHour,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Lays out one day's events.
///
/// Never fails and never drops events. Degenerate spans (end at or before
/// start) are packed like any other interval and may render oddly; rejecting
/// them is the caller's job.
pub fn layout_events(events: &[Event], view_start: i32) -> Vec<EventGeometry<'_>> {
    let intervals = sorted_intervals(events);
    let lanes = assign_lanes(&intervals);

    intervals
        .iter()
        .zip(&lanes)
        .map(|(interval, &lane)| {
            let max_lane = intervals
                .iter()
                .zip(&lanes)
                .filter(|(other, _)| interval.overlaps(other))
                .map(|(_, &other_lane)| other_lane)
                .fold(lane, usize::max);
            let width_percent = 100.0 / (max_lane + 1) as f64;

            EventGeometry {
                event: interval.event,
                lane,
                top: interval.start - f64::from(view_start),
                height: interval.duration,
                left_percent: lane as f64 * width_percent,
                width_percent,
            }
        })
        .collect()
}

/// Sorts by start ascending, then duration descending so the longer event
/// claims the lower lane. The ID breaks remaining ties so any permutation of
/// the input produces the same layout.
fn sorted_intervals(events: &[Event]) -> Vec<Interval<'_>> {
    let mut intervals: Vec<Interval<'_>> = events.iter().map(Interval::from_event).collect();
    intervals.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then_with(|| b.duration.total_cmp(&a.duration))
            .then_with(|| a.event.id.cmp(&b.event.id))
    });
    intervals
}

/// Single-pass greedy packing; earlier placements are never revisited.
fn assign_lanes(intervals: &[Interval<'_>]) -> Vec<usize> {
    let mut lane_ends: Vec<DecimalHour> = Vec::new();

    intervals
        .iter()
        .map(|interval| {
            let free_lane = lane_ends
                .iter()
                .position(|&last_end| interval.start >= last_end - LANE_EPSILON);
            match free_lane {
                Some(lane) => {
                    lane_ends[lane] = interval.end;
                    lane
                }
                None => {
                    lane_ends.push(interval.end);
                    lane_ends.len() - 1
                }
            }
        })
        .collect()
}
