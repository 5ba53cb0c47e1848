//! Event domain model.
//!
//! # Responsibility
//! - Define the routine entry record and its colour tag.
//! - Provide the form payload (`EventDraft`) used by create/update flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `start`/`end` are canonical `HH:MM` text; an `end` of `00:00` after a
//!   nonzero start means end of day.
//! - The decoded end must be strictly after the decoded start.

use crate::time::{decode_hour, parse_canonical, resolve_end, DecimalHour};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one routine entry.
pub type EventId = Uuid;

/// Title shown for events saved without one.
pub const UNTITLED: &str = "Untitled";

/// Fixed colour tags available to entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Rose,
    Purple,
    Orange,
    Grey,
}

impl EventColor {
    /// All tags in palette order.
    pub const ALL: [EventColor; 6] = [
        Self::Blue,
        Self::Green,
        Self::Rose,
        Self::Purple,
        Self::Orange,
        Self::Grey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Rose => "rose",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Grey => "grey",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == value.trim())
    }
}

/// Which time field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl Display for TimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Save-time validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Time text is not canonical `HH:MM` (hour 0-23, minute 0-59).
    InvalidTime { field: TimeField, value: String },
    /// Decoded end is not strictly after decoded start.
    EndNotAfterStart { start: String, end: String },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime { field, value } => {
                write!(f, "invalid {field} time `{value}`; expected HH:MM")
            }
            Self::EndNotAfterStart { start, end } => {
                write!(f, "end time `{end}` must be after start time `{start}`")
            }
        }
    }
}

impl Error for EventValidationError {}

/// One routine entry on the daily timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Canonical `HH:MM` start.
    pub start: String,
    /// Canonical `HH:MM` end.
    pub end: String,
    pub color: EventColor,
}

impl Event {
    /// Creates an event with a freshly minted ID.
    pub fn new(
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: EventColor,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, start, end, color)
    }

    /// Creates an event with a caller-provided ID.
    ///
    /// Does not validate; see `validate()`.
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: EventColor,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start: start.into(),
            end: end.into(),
            color,
        }
    }

    /// Builds a new event from form input.
    pub fn from_draft(draft: &EventDraft) -> Self {
        Self::new(
            draft.title.clone(),
            draft.start.clone(),
            draft.end.clone(),
            draft.color,
        )
    }

    /// Builds the replacement record for event `id` from form input.
    pub fn from_draft_with_id(id: EventId, draft: &EventDraft) -> Self {
        Self::with_id(
            id,
            draft.title.clone(),
            draft.start.clone(),
            draft.end.clone(),
            draft.color,
        )
    }

    /// Decoded `(start, end)` with the midnight wraparound applied.
    pub fn decoded_span(&self) -> (DecimalHour, DecimalHour) {
        let start = decode_hour(&self.start);
        let end = resolve_end(start, decode_hour(&self.end));
        (start, end)
    }

    /// Title for display, falling back to `Untitled`.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            self.title.as_str()
        }
    }

    /// Validates save-time invariants.
    ///
    /// Malformed time text is rejected here rather than decoded to `0`, so a
    /// parse failure can never turn into an end-of-day time.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        let (start_hour, start_minute) =
            parse_canonical(&self.start).ok_or_else(|| EventValidationError::InvalidTime {
                field: TimeField::Start,
                value: self.start.clone(),
            })?;
        let (end_hour, end_minute) =
            parse_canonical(&self.end).ok_or_else(|| EventValidationError::InvalidTime {
                field: TimeField::End,
                value: self.end.clone(),
            })?;

        let start = f64::from(start_hour) + f64::from(start_minute) / 60.0;
        let end = resolve_end(start, f64::from(end_hour) + f64::from(end_minute) / 60.0);
        if end <= start {
            return Err(EventValidationError::EndNotAfterStart {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        Ok(())
    }
}

/// Editable event fields as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: EventColor,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: EventColor,
    ) -> Self {
        Self {
            title: title.into(),
            start: start.into(),
            end: end.into(),
            color,
        }
    }
}

impl Default for EventDraft {
    /// The form's initial one-hour entry.
    fn default() -> Self {
        Self::new("", "09:00", "10:00", EventColor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_end_validates_as_end_of_day() {
        let event = Event::new("late", "23:00", "00:00", EventColor::Grey);
        assert!(event.validate().is_ok());
        assert_eq!(event.decoded_span(), (23.0, 24.0));
    }

    #[test]
    fn midnight_to_midnight_is_not_a_whole_day() {
        let event = Event::new("all day", "00:00", "00:00", EventColor::Blue);
        assert!(matches!(
            event.validate(),
            Err(EventValidationError::EndNotAfterStart { .. })
        ));
    }

    #[test]
    fn malformed_end_is_rejected_not_coerced() {
        let event = Event::new("broken", "09:00", "9pm", EventColor::Blue);
        let err = event.validate().unwrap_err();
        assert!(matches!(
            err,
            EventValidationError::InvalidTime {
                field: TimeField::End,
                ..
            }
        ));
    }

    #[test]
    fn color_tags_roundtrip_through_text() {
        for color in EventColor::ALL {
            assert_eq!(EventColor::parse(color.as_str()), Some(color));
        }
        assert_eq!(EventColor::parse("teal"), None);
    }
}
