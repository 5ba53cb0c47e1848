//! Pixel projection of a laid-out day.
//!
//! Turns hour-based layout output into the rectangles and labels a
//! presentation layer draws: the hour axis, zone bands, event cards, and the
//! reverse mapping from a click offset to a draft time slot.

use crate::config::TimelineConfig;
use crate::layout::overlap::{layout_events, EventGeometry};
use crate::layout::view_range::{compute_view_range, ViewRange};
use crate::model::event::{Event, EventColor, EventDraft, EventId};
use crate::time::{encode_hour, encode_stored_range, format_canonical, ClockFormat};

/// Horizontal gap trimmed from every card width.
pub const CARD_GAP_PX: f64 = 8.0;
/// Cards shorter than this render in compact mode.
pub const COMPACT_HEIGHT_PX: f64 = 40.0;
const BASE_Z_INDEX: i64 = 10;

/// One row label on the hour axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLabel {
    pub hour: i32,
    pub label: String,
    pub is_last: bool,
}

/// A zone clipped to the visible range.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBand {
    pub label: String,
    pub top_px: f64,
    pub height_px: f64,
}

/// Drawable event rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    pub time_label: String,
    pub color: EventColor,
    pub top_px: f64,
    pub height_px: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    /// Pixels to subtract from the percentage width.
    pub gap_px: f64,
    pub z_index: i64,
    pub compact: bool,
}

/// Start/end pre-filled after clicking an empty spot on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub start: String,
    pub end: String,
}

impl SlotDraft {
    pub fn into_draft(self) -> EventDraft {
        EventDraft::new("", self.start, self.end, EventColor::default())
    }
}

/// Labels for every whole hour in `[view.start, view.end]`.
pub fn hour_axis(view: ViewRange, clock: ClockFormat) -> Vec<HourLabel> {
    (view.start..=view.end)
        .map(|hour| HourLabel {
            hour,
            label: encode_hour(f64::from(hour), clock),
            is_last: hour == view.end,
        })
        .collect()
}

/// Zone bands clipped to the view; zones entirely outside are omitted.
pub fn zone_bands(view: ViewRange, config: &TimelineConfig) -> Vec<ZoneBand> {
    let view_start = f64::from(view.start);
    let view_end = f64::from(view.end);

    config
        .zones
        .iter()
        .filter_map(|zone| {
            let start = zone.start.max(view_start);
            let end = zone.end.min(view_end);
            (end > start).then(|| ZoneBand {
                label: zone.label.clone(),
                top_px: (start - view_start) * config.slot_height_px,
                height_px: (end - start) * config.slot_height_px,
            })
        })
        .collect()
}

/// Number of one-hour grid cells between the view bounds.
pub fn grid_cell_count(view: ViewRange) -> usize {
    usize::try_from(view.hours()).unwrap_or(0)
}

/// Converts layout geometry into pixel cards.
pub fn event_cards(
    geometry: &[EventGeometry<'_>],
    config: &TimelineConfig,
    clock: ClockFormat,
) -> Vec<EventCard> {
    geometry
        .iter()
        .map(|placed| {
            let top_px = placed.top * config.slot_height_px;
            let height_px = placed.height * config.slot_height_px;
            EventCard {
                id: placed.event.id,
                title: placed.event.display_title().to_string(),
                time_label: encode_stored_range(&placed.event.start, &placed.event.end, clock),
                color: placed.event.color,
                top_px,
                height_px,
                left_percent: placed.left_percent,
                width_percent: placed.width_percent,
                gap_px: CARD_GAP_PX,
                z_index: BASE_Z_INDEX.saturating_add(top_px.floor() as i64),
                compact: height_px < COMPACT_HEIGHT_PX,
            }
        })
        .collect()
}

/// Maps a vertical click offset to a one-hour draft slot.
///
/// The start is rounded down to `:00` or `:30`. An end that would pass
/// midnight is capped at `00:00`, the end of the day.
pub fn slot_from_offset(view: ViewRange, offset_y_px: f64, config: &TimelineConfig) -> SlotDraft {
    let clicked = f64::from(view.start) + offset_y_px / config.slot_height_px;
    let hour = clicked.floor();
    let minute = ((clicked - hour) * 60.0).floor();
    let rounded_minute = if minute < 30.0 { 0 } else { 30 };
    let hour = hour.clamp(0.0, 23.0) as u32;

    let end = if hour + 1 >= 24 {
        format_canonical(0, 0)
    } else {
        format_canonical(hour + 1, rounded_minute)
    };

    SlotDraft {
        start: format_canonical(hour, rounded_minute),
        end,
    }
}

/// Everything a presentation layer needs to draw one day.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub view: ViewRange,
    pub clock: ClockFormat,
    pub hours: Vec<HourLabel>,
    pub zones: Vec<ZoneBand>,
    pub grid_cells: usize,
    pub cards: Vec<EventCard>,
}

/// Runs view-range computation, overlap layout and projection for one day.
pub fn build_timeline(events: &[Event], clock: ClockFormat, config: &TimelineConfig) -> TimelineView {
    let view = compute_view_range(events, config);
    let geometry = layout_events(events, view.start);

    TimelineView {
        view,
        clock,
        hours: hour_axis(view, clock),
        zones: zone_bands(view, config),
        grid_cells: grid_cell_count(view),
        cards: event_cards(&geometry, config, clock),
    }
}
