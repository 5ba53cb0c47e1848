//! Core logic for the daily routine timeline.
//!
//! Decodes stored clock text, packs overlapping events into lanes, computes
//! the visible hour span and persists the routine. Presentation layers only
//! draw what `TimelineView` describes.

pub mod config;
pub mod db;
pub mod import;
pub mod layout;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod time;

pub use config::{ConfigError, TimelineConfig, Zone};
pub use import::legacy::{parse_legacy_events, ImportReport, LegacyImportError};
pub use layout::{
    build_timeline, compute_view_range, layout_events, slot_from_offset, EventCard,
    EventGeometry, TimelineView, ViewRange,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventColor, EventDraft, EventId, EventValidationError, TimeField};
pub use repo::event_repo::{
    EventRepository, RepoError, RepoResult, SeedOutcome, SqliteEventRepository,
};
pub use repo::prefs_repo::{PreferencesRepository, SqlitePreferencesRepository};
pub use service::routine_service::{RoutineService, SqliteRoutineService};
pub use service::routine_state::RoutineState;
pub use time::{decode_hour, encode_hour, encode_stored_range, ClockFormat};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
