//! Repository layer for routine persistence.
//!
//! # Responsibility
//! - Define storage contracts used by services.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Event::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod event_repo;
pub mod prefs_repo;
