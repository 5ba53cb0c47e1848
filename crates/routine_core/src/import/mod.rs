//! Data import from earlier planner formats.

pub mod legacy;
