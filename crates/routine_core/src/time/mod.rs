//! Clock text handling for timeline entries.
//!
//! # Responsibility
//! - Convert between clock text and continuous decimal hours.
//! - Provide the form-level helpers that produce canonical stored text.
//!
//! # Invariants
//! - Stored text is always canonical 24-hour `HH:MM`.
//! - Display mode never changes stored text or decimal arithmetic.

pub mod clock;

pub use clock::{
    compose_canonical, decode_hour, encode_hour, encode_stored_range, format_canonical,
    format_stored_time, parse_canonical, resolve_end, split_for_form, ClockFormat, DecimalHour,
    FormTime, Meridiem, END_OF_DAY,
};
