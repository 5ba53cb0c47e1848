//! Domain model for daily routine entries.
//!
//! # Responsibility
//! - Define the canonical event record shared by layout, storage and UI.
//! - Enforce save-time invariants through `Event::validate()`.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Stored times are canonical 24-hour text.

pub mod event;
