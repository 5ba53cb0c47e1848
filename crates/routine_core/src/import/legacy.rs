//! Import of the previous weekly-planner export.
//!
//! # Responsibility
//! - Parse the legacy JSON array of weekly events.
//! - Flatten every entry onto the single daily timeline.
//!
//! # Invariants
//! - The legacy `day` field is dropped; all entries land on the same day.
//! - Parsing does not validate times; the importer skips invalid entries.

use crate::model::event::{Event, EventColor};
use crate::repo::event_repo::RepoError;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Legacy import failures.
#[derive(Debug)]
pub enum LegacyImportError {
    Parse(serde_json::Error),
    Repo(RepoError),
}

impl Display for LegacyImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid legacy planner data: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LegacyImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LegacyImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RepoError> for LegacyImportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Outcome counters of one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    /// `false` when the store already held events and nothing was imported.
    pub store_was_empty: bool,
}

#[derive(Debug, Deserialize)]
struct LegacyRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Parses a legacy export into day-less events.
///
/// IDs that are not UUIDs (the old planner used millisecond timestamps) get a
/// fresh ID. Unknown colour tags fall back to the default colour.
pub fn parse_legacy_events(json: &str) -> Result<Vec<Event>, LegacyImportError> {
    let records: Vec<LegacyRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(into_event).collect())
}

fn into_event(record: LegacyRecord) -> Event {
    let id = record
        .id
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| Uuid::parse_str(text).ok())
        .unwrap_or_else(Uuid::new_v4);
    let color = record
        .color
        .as_deref()
        .and_then(EventColor::parse)
        .unwrap_or_default();

    Event::with_id(
        id,
        record.title.unwrap_or_default(),
        record.start.unwrap_or_default(),
        record.end.unwrap_or_default(),
        color,
    )
}
