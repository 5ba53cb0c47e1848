//! Preference repository contract and SQLite implementation.
//!
//! Preferences are stored as key/value text rows. Only the clock format is
//! persisted today; an absent row means the 24-hour default.

use crate::repo::event_repo::{RepoError, RepoResult};
use crate::time::ClockFormat;
use rusqlite::{params, Connection, OptionalExtension};

const CLOCK_FORMAT_KEY: &str = "use_24h";

/// Repository interface for user preferences.
pub trait PreferencesRepository {
    fn load_clock_format(&self) -> RepoResult<ClockFormat>;
    fn save_clock_format(&self, clock: ClockFormat) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePreferencesRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferencesRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferencesRepository for SqlitePreferencesRepository<'_> {
    fn load_clock_format(&self) -> RepoResult<ClockFormat> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [CLOCK_FORMAT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match value.as_deref() {
            None => Ok(ClockFormat::default()),
            Some("true") => Ok(ClockFormat::TwentyFourHour),
            Some("false") => Ok(ClockFormat::TwelveHour),
            Some(other) => Err(RepoError::InvalidData(format!(
                "invalid value `{other}` for preference `{CLOCK_FORMAT_KEY}`"
            ))),
        }
    }

    fn save_clock_format(&self, clock: ClockFormat) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![CLOCK_FORMAT_KEY, bool_to_text(clock.is_24h())],
        )?;
        Ok(())
    }
}

fn bool_to_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
