//! Clock text codec.
//!
//! # Responsibility
//! - Decode free-form clock text (`09:30`, `9:30 pm`) into decimal hours.
//! - Encode decimal hours and stored text for 24-hour or 12-hour display.
//! - Translate between stored text and the hour/minute/meridiem form inputs.
//!
//! # Invariants
//! - `decode_hour` never fails: text without two integer components decodes
//!   to `0.0`. Callers that need to reject malformed text use
//!   `parse_canonical` instead.
//! - `encode_hour` expects a non-negative decimal hour and does not validate.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MERIDIEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(am|pm)").expect("valid meridiem regex"));
static CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("valid canonical time regex"));

/// Time of day as a real number of hours since midnight (`9:30` -> `9.5`).
pub type DecimalHour = f64;

/// Decimal hour used for an end time of `00:00` after a nonzero start.
pub const END_OF_DAY: DecimalHour = 24.0;

/// User-facing clock display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    /// `00:00`..`23:59`.
    #[default]
    TwentyFourHour,
    /// `12:00 AM`..`11:59 PM`.
    TwelveHour,
}

impl ClockFormat {
    /// Maps the persisted `use_24h` flag to a clock format.
    pub fn from_use_24h(use_24h: bool) -> Self {
        if use_24h {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    pub fn is_24h(self) -> bool {
        matches!(self, Self::TwentyFourHour)
    }

    /// Returns `(min, max)` accepted by the hour input in this mode.
    pub fn hour_input_bounds(self) -> (u32, u32) {
        match self {
            Self::TwentyFourHour => (0, 23),
            Self::TwelveHour => (1, 12),
        }
    }

    /// Caps a typed hour at the mode maximum.
    ///
    /// The minimum is deliberately not enforced while typing: a partial entry
    /// such as `0` on the way to `09` must stay editable.
    pub fn clamp_hour_input(self, value: i64) -> i64 {
        let (_, max) = self.hour_input_bounds();
        value.min(i64::from(max))
    }
}

/// 12-hour clock half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Meridiem for a 24-hour clock hour (`12..24` is PM).
    pub fn for_hour(hour: i64) -> Self {
        if (12..24).contains(&hour) {
            Self::Pm
        } else {
            Self::Am
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }

    /// Parses a form suffix (`AM`/`PM`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// Hour/minute form inputs for one time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTime {
    pub hour: u32,
    pub minute: u32,
    /// `None` in 24-hour mode.
    pub meridiem: Option<Meridiem>,
}

impl FormTime {
    /// Builds form values from raw input text; unparsable fields become `0`.
    pub fn from_inputs(hour: &str, minute: &str, meridiem: Option<Meridiem>) -> Self {
        Self {
            hour: hour.trim().parse().unwrap_or(0),
            minute: minute.trim().parse().unwrap_or(0),
            meridiem,
        }
    }

    /// Zero-padded `(hour, minute)` text as shown in the inputs.
    pub fn padded_fields(&self) -> (String, String) {
        (format!("{:02}", self.hour), format!("{:02}", self.minute))
    }
}

/// Decodes clock text into a decimal hour.
///
/// Accepts an optional case-insensitive `am`/`pm` marker anywhere in the text.
/// Returns `0.0` when the hour or minute component is missing or not an
/// integer; this fallback is the documented contract, not an error path.
pub fn decode_hour(text: &str) -> DecimalHour {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return 0.0;
    }

    let is_pm = lowered.contains("pm");
    let is_am = lowered.contains("am");
    let stripped = MERIDIEM_RE.replace_all(&lowered, "");
    let mut parts = stripped.trim().split(':');

    let (Some(mut hour), Some(minute)) = (
        parse_component(parts.next()),
        parse_component(parts.next()),
    ) else {
        return 0.0;
    };

    if is_pm && hour < 12 {
        hour += 12;
    }
    if is_am && hour == 12 {
        hour = 0;
    }

    hour as f64 + minute as f64 / 60.0
}

/// Applies the midnight wraparound rule to a decoded end.
///
/// An end of exactly `0.0` after a nonzero start means end of day.
pub fn resolve_end(start: DecimalHour, end: DecimalHour) -> DecimalHour {
    if end == 0.0 && start > 0.0 {
        END_OF_DAY
    } else {
        end
    }
}

/// Encodes a decimal hour for display.
///
/// Minutes are rounded to the nearest whole minute; a remainder that rounds
/// up to 60 carries into the hour.
pub fn encode_hour(hour: DecimalHour, clock: ClockFormat) -> String {
    let floor = hour.floor();
    let mut whole = floor as i64;
    let mut minute = ((hour - floor) * 60.0).round() as i64;
    if minute >= 60 {
        whole = whole.saturating_add(1);
        minute = 0;
    }

    match clock {
        ClockFormat::TwentyFourHour => {
            let display = if whole == 24 || whole == 0 {
                "00".to_string()
            } else {
                format!("{whole:02}")
            };
            format!("{display}:{minute:02}")
        }
        ClockFormat::TwelveHour => {
            let effective = whole.rem_euclid(24);
            let h12 = match effective % 12 {
                0 => 12,
                other => other,
            };
            format!(
                "{h12}:{minute:02} {}",
                Meridiem::for_hour(effective).as_str()
            )
        }
    }
}

/// Formats stored canonical text for display.
///
/// 24-hour mode shows the stored text unchanged.
pub fn format_stored_time(text: &str, clock: ClockFormat) -> String {
    match clock {
        ClockFormat::TwentyFourHour => text.to_string(),
        ClockFormat::TwelveHour => encode_hour(decode_hour(text), clock),
    }
}

/// Formats a stored start/end pair as `"<start> - <end>"`.
pub fn encode_stored_range(start: &str, end: &str, clock: ClockFormat) -> String {
    format!(
        "{} - {}",
        format_stored_time(start, clock),
        format_stored_time(end, clock)
    )
}

/// Strictly parses canonical stored text (`HH:MM`, hour `0..=23`).
pub fn parse_canonical(text: &str) -> Option<(u32, u32)> {
    let captures = CANONICAL_RE.captures(text)?;
    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Formats hour/minute as canonical stored text.
pub fn format_canonical(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Splits stored text into form inputs for the given mode.
///
/// Components that fail to parse are shown as `0`.
pub fn split_for_form(text: &str, clock: ClockFormat) -> FormTime {
    let mut parts = text.split(':');
    let hour: u32 = parts
        .next()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0);
    let minute: u32 = parts
        .next()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0);

    match clock {
        ClockFormat::TwentyFourHour => FormTime {
            hour,
            minute,
            meridiem: None,
        },
        ClockFormat::TwelveHour => {
            let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
            let h12 = match hour % 12 {
                0 => 12,
                other => other,
            };
            FormTime {
                hour: h12,
                minute,
                meridiem: Some(meridiem),
            }
        }
    }
}

/// Converts form inputs back into canonical stored text.
///
/// In 12-hour mode the meridiem is applied (`PM` adds 12 below noon, `12 AM`
/// becomes `00`). The result is not range-checked; validation happens when
/// the event is saved.
pub fn compose_canonical(form: FormTime, clock: ClockFormat) -> String {
    let mut hour = form.hour;
    if !clock.is_24h() {
        match form.meridiem {
            Some(Meridiem::Pm) if hour < 12 => hour += 12,
            Some(Meridiem::Am) if hour == 12 => hour = 0,
            _ => {}
        }
    }
    format_canonical(hour, form.minute)
}

fn parse_component(value: Option<&str>) -> Option<i64> {
    value?.trim().parse::<i64>().ok()
}
