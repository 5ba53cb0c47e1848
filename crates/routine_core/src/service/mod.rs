//! Core use-case services.
//!
//! # Responsibility
//! - Provide the explicit `RoutineState` value and its transitions.
//! - Orchestrate repository calls into save/delete/preference use cases.

pub mod routine_service;
pub mod routine_state;
