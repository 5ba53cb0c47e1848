//! Timeline configuration.
//!
//! # Responsibility
//! - Hold the default visible span, pixel scale and fixed day zones.
//! - Load and validate host-provided overrides from JSON.
//!
//! # Invariants
//! - `default_start < default_end`, both within `0..=24`.
//! - Every zone has a non-empty label and `0 <= start < end <= 24`.
//! - `slot_height_px` is finite and positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pixels per hour on the vertical axis.
pub const DEFAULT_SLOT_HEIGHT_PX: f64 = 60.0;
pub const DEFAULT_VIEW_START: i32 = 6;
pub const DEFAULT_VIEW_END: i32 = 23;

/// Fixed labelled period of the day drawn behind events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl Zone {
    pub fn new(label: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }
}

/// Morning, afternoon and evening zones.
pub fn default_zones() -> Vec<Zone> {
    vec![
        Zone::new("Morning", 5.0, 12.0),
        Zone::new("Afternoon", 12.0, 18.0),
        Zone::new("Evening", 18.0, 24.0),
    ]
}

/// Configuration errors raised while loading or validating overrides.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidDefaultSpan { start: i32, end: i32 },
    InvalidZone { label: String },
    InvalidSlotHeight(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid timeline config: {err}"),
            Self::InvalidDefaultSpan { start, end } => write!(
                f,
                "default view span {start}..{end} must be increasing within 0..=24"
            ),
            Self::InvalidZone { label } => write!(
                f,
                "zone `{label}` must have a label and an increasing span within 0..=24"
            ),
            Self::InvalidSlotHeight(value) => {
                write!(f, "slot height must be a positive number, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Timeline presentation and view-range settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub slot_height_px: f64,
    pub default_start: i32,
    pub default_end: i32,
    pub zones: Vec<Zone>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            slot_height_px: DEFAULT_SLOT_HEIGHT_PX,
            default_start: DEFAULT_VIEW_START,
            default_end: DEFAULT_VIEW_END,
            zones: default_zones(),
        }
    }
}

impl TimelineConfig {
    /// Parses a JSON override document; missing fields keep their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: TimelineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.slot_height_px.is_finite() || self.slot_height_px <= 0.0 {
            return Err(ConfigError::InvalidSlotHeight(self.slot_height_px));
        }

        let span_ok = (0..=24).contains(&self.default_start)
            && (0..=24).contains(&self.default_end)
            && self.default_start < self.default_end;
        if !span_ok {
            return Err(ConfigError::InvalidDefaultSpan {
                start: self.default_start,
                end: self.default_end,
            });
        }

        for zone in &self.zones {
            let zone_ok = !zone.label.trim().is_empty()
                && zone.start >= 0.0
                && zone.end <= 24.0
                && zone.start < zone.end;
            if !zone_ok {
                return Err(ConfigError::InvalidZone {
                    label: zone.label.clone(),
                });
            }
        }

        Ok(())
    }

    /// Earliest zone start, if any zones are configured.
    pub fn lowest_zone_start(&self) -> Option<f64> {
        self.zones.iter().map(|zone| zone.start).reduce(f64::min)
    }

    /// Latest zone end, if any zones are configured.
    pub fn highest_zone_end(&self) -> Option<f64> {
        self.zones.iter().map(|zone| zone.end).reduce(f64::max)
    }
}
