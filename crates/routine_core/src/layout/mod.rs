//! Timeline layout.
//!
//! # Responsibility
//! - Compute the visible hour span for a day (`view_range`).
//! - Pack overlapping events into side-by-side lanes (`overlap`).
//! - Project hour-based geometry into pixels for drawing (`projection`).
//!
//! # Invariants
//! - Layout functions are pure: no I/O, no shared state, no errors.
//! - Every input event yields exactly one geometry record.

pub mod overlap;
pub mod projection;
pub mod view_range;

pub use overlap::{layout_events, EventGeometry, Interval, LANE_EPSILON};
pub use projection::{
    build_timeline, event_cards, grid_cell_count, hour_axis, slot_from_offset, zone_bands,
    EventCard, HourLabel, SlotDraft, TimelineView, ZoneBand, CARD_GAP_PX, COMPACT_HEIGHT_PX,
};
pub use view_range::{compute_view_range, ViewRange};
