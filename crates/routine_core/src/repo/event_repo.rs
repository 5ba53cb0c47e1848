//! Event repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide whole-record CRUD over `routine_events`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Writes call `Event::validate()` before touching SQL.
//! - Reads reject invalid persisted rows instead of masking them.
//! - Listing preserves insertion order; updates keep an event's position.

use crate::db::DbError;
use crate::model::event::{Event, EventColor, EventId, EventValidationError};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const EVENT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    start_time,
    end_time,
    color
FROM routine_events";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event and preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(EventValidationError),
    Db(DbError),
    NotFound(EventId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<EventValidationError> for RepoError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of seeding an empty store in one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    /// Entries left out because they failed `Event::validate()`.
    pub rejected: Vec<(EventId, EventValidationError)>,
}

/// Repository interface for routine events.
pub trait EventRepository {
    fn create_event(&self, event: &Event) -> RepoResult<EventId>;
    /// Replaces every field of an existing event.
    fn update_event(&self, event: &Event) -> RepoResult<()>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    /// Removes an event permanently.
    fn delete_event(&self, id: EventId) -> RepoResult<()>;
    /// Inserts `events` only if the store holds none, all or nothing.
    ///
    /// Returns `None` when the store was not empty. Invalid entries are
    /// rejected without aborting; any storage error rolls back every insert.
    fn seed_if_empty(&self, events: &[Event]) -> RepoResult<Option<SeedOutcome>>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        event.validate()?;
        insert_event(self.conn, event)?;
        Ok(event.id)
    }

    fn update_event(&self, event: &Event) -> RepoResult<()> {
        event.validate()?;

        let changed = self.conn.execute(
            "UPDATE routine_events
             SET
                title = ?1,
                start_time = ?2,
                end_time = ?3,
                color = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?5;",
            params![
                event.title.as_str(),
                event.start.as_str(),
                event.end.as_str(),
                event.color.as_str(),
                event.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(event.id));
        }

        Ok(())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }

        Ok(None)
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }

    fn delete_event(&self, id: EventId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM routine_events WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn seed_if_empty(&self, events: &[Event]) -> RepoResult<Option<SeedOutcome>> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let stored: i64 =
            tx.query_row("SELECT COUNT(*) FROM routine_events;", [], |row| row.get(0))?;
        if stored > 0 {
            return Ok(None);
        }

        let mut outcome = SeedOutcome::default();
        for event in events {
            if let Err(err) = event.validate() {
                outcome.rejected.push((event.id, err));
                continue;
            }
            insert_event(&tx, event)?;
            outcome.inserted += 1;
        }
        tx.commit()?;

        Ok(Some(outcome))
    }
}

fn insert_event(conn: &Connection, event: &Event) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO routine_events (uuid, title, start_time, end_time, color)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            event.id.to_string(),
            event.title.as_str(),
            event.start.as_str(),
            event.end.as_str(),
            event.color.as_str(),
        ],
    )
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in routine_events.uuid"
        ))
    })?;

    let color_text: String = row.get("color")?;
    let color = EventColor::parse(&color_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid color `{color_text}` in routine_events.color"
        ))
    })?;

    let event = Event {
        id,
        title: row.get("title")?,
        start: row.get("start_time")?,
        end: row.get("end_time")?,
        color,
    };
    event.validate()?;
    Ok(event)
}
