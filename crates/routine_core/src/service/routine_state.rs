//! Explicit routine state value.
//!
//! # Responsibility
//! - Hold the day's events and the display clock format as one value.
//! - Apply add/update/remove/clock changes by returning a new value.
//!
//! # Invariants
//! - Mutation helpers never modify `self`; callers replace their state with
//!   the returned value.
//! - Added and updated events pass `Event::validate()` first.

use crate::config::TimelineConfig;
use crate::layout::{
    build_timeline, compute_view_range, layout_events, EventGeometry, TimelineView, ViewRange,
};
use crate::model::event::{Event, EventDraft, EventId, EventValidationError};
use crate::time::ClockFormat;
use serde::{Deserialize, Serialize};

/// Events plus display preferences for one timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutineState {
    pub events: Vec<Event>,
    pub clock: ClockFormat,
}

impl RoutineState {
    pub fn new(events: Vec<Event>, clock: ClockFormat) -> Self {
        Self { events, clock }
    }

    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Returns a state with a new event minted from `draft` appended.
    pub fn with_event_added(
        &self,
        draft: &EventDraft,
    ) -> Result<(Self, EventId), EventValidationError> {
        let event = Event::from_draft(draft);
        event.validate()?;

        let id = event.id;
        let mut events = self.events.clone();
        events.push(event);
        Ok((Self::new(events, self.clock), id))
    }

    /// Returns a state with event `id` replaced by `draft`.
    ///
    /// The draft is validated even when `id` is unknown; an unknown `id` then
    /// yields an unchanged copy.
    pub fn with_event_updated(
        &self,
        id: EventId,
        draft: &EventDraft,
    ) -> Result<Self, EventValidationError> {
        let candidate = Event::from_draft_with_id(id, draft);
        candidate.validate()?;

        let events = self
            .events
            .iter()
            .map(|event| {
                if event.id == id {
                    candidate.clone()
                } else {
                    event.clone()
                }
            })
            .collect();
        Ok(Self::new(events, self.clock))
    }

    /// Returns a state without event `id`.
    pub fn with_event_removed(&self, id: EventId) -> Self {
        let events = self
            .events
            .iter()
            .filter(|event| event.id != id)
            .cloned()
            .collect();
        Self::new(events, self.clock)
    }

    pub fn with_clock(&self, clock: ClockFormat) -> Self {
        Self::new(self.events.clone(), clock)
    }

    pub fn view_range(&self, config: &TimelineConfig) -> ViewRange {
        compute_view_range(&self.events, config)
    }

    /// Hour-based layout relative to this state's view range.
    pub fn layout(&self, config: &TimelineConfig) -> Vec<EventGeometry<'_>> {
        layout_events(&self.events, self.view_range(config).start)
    }

    pub fn timeline(&self, config: &TimelineConfig) -> TimelineView {
        build_timeline(&self.events, self.clock, config)
    }
}
