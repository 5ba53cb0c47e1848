use routine_core::{compute_view_range, Event, EventColor, TimelineConfig, ViewRange, Zone};

fn event(start: &str, end: &str) -> Event {
    Event::new("entry", start, end, EventColor::Green)
}

fn zoneless() -> TimelineConfig {
    TimelineConfig {
        zones: Vec::new(),
        ..TimelineConfig::default()
    }
}

#[test]
fn default_zones_bound_the_view() {
    let view = compute_view_range(&[], &TimelineConfig::default());
    assert_eq!(view, ViewRange { start: 5, end: 24 });
}

#[test]
fn early_event_floors_the_start() {
    let events = vec![event("03:15", "04:00"), event("09:00", "10:00")];
    let view = compute_view_range(&events, &TimelineConfig::default());
    assert_eq!(view.start, 3);
}

#[test]
fn midnight_end_extends_to_twenty_four() {
    let events = vec![event("22:00", "00:00")];
    let view = compute_view_range(&events, &zoneless());
    assert_eq!(view, ViewRange { start: 6, end: 24 });
}

#[test]
fn events_inside_defaults_do_not_change_the_view() {
    let events = vec![event("08:00", "09:30"), event("12:00", "18:45")];
    let view = compute_view_range(&events, &zoneless());
    assert_eq!(view, ViewRange { start: 6, end: 23 });
}

#[test]
fn malformed_start_widens_to_midnight() {
    let events = vec![event("soon", "10:00")];
    let view = compute_view_range(&events, &zoneless());
    assert_eq!(view.start, 0);
}

#[test]
fn custom_zones_extend_both_bounds() {
    let config = TimelineConfig {
        default_start: 8,
        default_end: 18,
        zones: vec![Zone::new("Focus", 7.5, 11.0), Zone::new("Wind down", 20.0, 21.5)],
        ..TimelineConfig::default()
    };
    let view = compute_view_range(&[], &config);
    assert_eq!(view, ViewRange { start: 7, end: 22 });
}
