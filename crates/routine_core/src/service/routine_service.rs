//! Routine use-case service.
//!
//! # Responsibility
//! - Load the persisted routine into a `RoutineState`.
//! - Validate and persist create/update/delete and clock-format changes.
//! - Produce the drawable timeline for the stored day.
//!
//! # Invariants
//! - Invalid drafts are rejected before any write.
//! - Service layer stays storage-agnostic; SQLite is one repository choice.
//! - Logs carry IDs and outcomes only, never event titles.

use crate::config::TimelineConfig;
use crate::import::legacy::{parse_legacy_events, ImportReport, LegacyImportError};
use crate::layout::TimelineView;
use crate::model::event::{Event, EventDraft, EventId};
use crate::repo::event_repo::{EventRepository, RepoError, RepoResult, SqliteEventRepository};
use crate::repo::prefs_repo::{PreferencesRepository, SqlitePreferencesRepository};
use crate::service::routine_state::RoutineState;
use crate::time::ClockFormat;
use log::{info, warn};
use rusqlite::Connection;

/// Service backed by the SQLite repositories of one connection.
pub type SqliteRoutineService<'conn> =
    RoutineService<SqliteEventRepository<'conn>, SqlitePreferencesRepository<'conn>>;

/// Use-case service over event and preference repositories.
pub struct RoutineService<E: EventRepository, P: PreferencesRepository> {
    events: E,
    prefs: P,
}

impl<'conn> RoutineService<SqliteEventRepository<'conn>, SqlitePreferencesRepository<'conn>> {
    /// Creates a service using SQLite repositories on `conn`.
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteEventRepository::new(conn),
            SqlitePreferencesRepository::new(conn),
        )
    }
}

impl<E: EventRepository, P: PreferencesRepository> RoutineService<E, P> {
    pub fn new(events: E, prefs: P) -> Self {
        Self { events, prefs }
    }

    /// Reads all events (insertion order) and the clock preference.
    pub fn load_state(&self) -> RepoResult<RoutineState> {
        let events = self.events.list_events()?;
        let clock = self.prefs.load_clock_format()?;
        info!(
            "event=state_load module=service status=ok event_count={} use_24h={}",
            events.len(),
            clock.is_24h()
        );
        Ok(RoutineState::new(events, clock))
    }

    /// Creates a new event, or replaces `editing` when set.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the draft fails `Event::validate()`.
    /// - `RepoError::NotFound` when `editing` names no stored event.
    pub fn save_event(&self, editing: Option<EventId>, draft: &EventDraft) -> RepoResult<EventId> {
        let (op, result) = match editing {
            Some(id) => {
                let event = Event::from_draft_with_id(id, draft);
                ("update", self.events.update_event(&event).map(|()| id))
            }
            None => ("create", self.events.create_event(&Event::from_draft(draft))),
        };

        match &result {
            Ok(id) => info!("event=event_save module=service status=ok op={op} event_id={id}"),
            Err(err) => warn!(
                "event=event_save module=service status=error op={op} error_code={}",
                error_code(err)
            ),
        }
        result
    }

    pub fn delete_event(&self, id: EventId) -> RepoResult<()> {
        let result = self.events.delete_event(id);
        match &result {
            Ok(()) => info!("event=event_delete module=service status=ok event_id={id}"),
            Err(err) => warn!(
                "event=event_delete module=service status=error event_id={id} error_code={}",
                error_code(err)
            ),
        }
        result
    }

    pub fn set_clock_format(&self, clock: ClockFormat) -> RepoResult<()> {
        self.prefs.save_clock_format(clock)?;
        info!(
            "event=prefs_save module=service status=ok use_24h={}",
            clock.is_24h()
        );
        Ok(())
    }

    /// Loads the stored day and projects it for drawing.
    pub fn timeline(&self, config: &TimelineConfig) -> RepoResult<TimelineView> {
        Ok(self.load_state()?.timeline(config))
    }

    /// Imports a legacy weekly-planner export into an empty store.
    ///
    /// A populated store is left untouched. Entries that fail validation are
    /// skipped and counted; a storage failure leaves the store empty.
    pub fn import_legacy(&self, json: &str) -> Result<ImportReport, LegacyImportError> {
        let events = parse_legacy_events(json)?;
        let outcome = match self.events.seed_if_empty(&events) {
            Ok(Some(outcome)) => outcome,
            Ok(None) => {
                info!("event=legacy_import module=service status=skipped reason=store_not_empty");
                return Ok(ImportReport::default());
            }
            Err(err) => {
                warn!(
                    "event=legacy_import module=service status=error error_code={} rolled_back=true",
                    error_code(&err)
                );
                return Err(err.into());
            }
        };

        for (id, err) in &outcome.rejected {
            warn!("event=legacy_import module=service status=skip event_id={id} error={err}");
        }
        let report = ImportReport {
            imported: outcome.inserted,
            skipped: outcome.rejected.len(),
            store_was_empty: true,
        };
        info!(
            "event=legacy_import module=service status=ok imported={} skipped={}",
            report.imported, report.skipped
        );
        Ok(report)
    }
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(_) => "validation_failed",
        RepoError::Db(_) => "db_error",
        RepoError::NotFound(_) => "not_found",
        RepoError::InvalidData(_) => "invalid_data",
    }
}
