use routine_core::layout::{
    build_timeline, event_cards, grid_cell_count, hour_axis, layout_events, slot_from_offset,
    zone_bands, CARD_GAP_PX,
};
use routine_core::{ClockFormat, Event, EventColor, TimelineConfig, ViewRange};

#[test]
fn hour_axis_labels_every_hour_inclusive() {
    let view = ViewRange { start: 5, end: 8 };

    let labels = hour_axis(view, ClockFormat::TwentyFourHour);
    let texts: Vec<&str> = labels.iter().map(|label| label.label.as_str()).collect();
    assert_eq!(texts, vec!["05:00", "06:00", "07:00", "08:00"]);
    assert!(labels[3].is_last);
    assert!(labels[..3].iter().all(|label| !label.is_last));

    let twelve = hour_axis(ViewRange { start: 11, end: 13 }, ClockFormat::TwelveHour);
    let texts: Vec<&str> = twelve.iter().map(|label| label.label.as_str()).collect();
    assert_eq!(texts, vec!["11:00 AM", "12:00 PM", "1:00 PM"]);
}

#[test]
fn end_of_day_axis_label_wraps_to_midnight() {
    let labels = hour_axis(ViewRange { start: 22, end: 24 }, ClockFormat::TwentyFourHour);
    assert_eq!(labels.last().unwrap().label, "00:00");
}

#[test]
fn zone_bands_are_clipped_to_the_view() {
    let config = TimelineConfig::default();

    let bands = zone_bands(ViewRange { start: 6, end: 20 }, &config);
    assert_eq!(bands.len(), 3);
    assert_eq!(bands[0].label, "Morning");
    assert_eq!((bands[0].top_px, bands[0].height_px), (0.0, 360.0));
    assert_eq!((bands[1].top_px, bands[1].height_px), (360.0, 360.0));
    assert_eq!((bands[2].top_px, bands[2].height_px), (720.0, 120.0));

    let afternoon_only = zone_bands(ViewRange { start: 13, end: 17 }, &config);
    assert_eq!(afternoon_only.len(), 1);
    assert_eq!(afternoon_only[0].label, "Afternoon");
    assert_eq!(afternoon_only[0].height_px, 240.0);
}

#[test]
fn grid_has_one_cell_per_hour() {
    assert_eq!(grid_cell_count(ViewRange { start: 5, end: 24 }), 19);
    assert_eq!(grid_cell_count(ViewRange { start: 9, end: 9 }), 0);
}

#[test]
fn cards_scale_geometry_to_pixels() {
    let config = TimelineConfig::default();
    let events = vec![
        Event::new("", "09:00", "09:30", EventColor::Rose),
        Event::new("Deep work", "10:00", "12:00", EventColor::Purple),
    ];
    let geometry = layout_events(&events, 5);
    let cards = event_cards(&geometry, &config, ClockFormat::TwentyFourHour);

    let short = &cards[0];
    assert_eq!(short.title, "Untitled");
    assert_eq!(short.time_label, "09:00 - 09:30");
    assert_eq!(short.top_px, 240.0);
    assert_eq!(short.height_px, 30.0);
    assert_eq!(short.z_index, 250);
    assert!(short.compact);
    assert_eq!(short.gap_px, CARD_GAP_PX);
    assert_eq!(short.color, EventColor::Rose);

    let long = &cards[1];
    assert_eq!(long.title, "Deep work");
    assert_eq!(long.height_px, 120.0);
    assert!(!long.compact);
    assert_eq!(long.width_percent, 100.0);
}

#[test]
fn click_offset_maps_to_half_hour_slot() {
    let config = TimelineConfig::default();
    let view = ViewRange { start: 5, end: 24 };

    let slot = slot_from_offset(view, 150.0, &config);
    assert_eq!((slot.start.as_str(), slot.end.as_str()), ("07:30", "08:30"));

    let slot = slot_from_offset(view, 20.0, &config);
    assert_eq!((slot.start.as_str(), slot.end.as_str()), ("05:00", "06:00"));
}

#[test]
fn late_click_caps_end_at_end_of_day() {
    let config = TimelineConfig::default();
    let view = ViewRange { start: 5, end: 24 };

    let slot = slot_from_offset(view, 1125.0, &config);
    assert_eq!((slot.start.as_str(), slot.end.as_str()), ("23:30", "00:00"));

    let draft = slot.into_draft();
    let event = Event::from_draft(&draft);
    assert!(event.validate().is_ok());
    assert_eq!(event.decoded_span(), (23.5, 24.0));
}

#[test]
fn build_timeline_combines_range_layout_and_projection() {
    let config = TimelineConfig::default();
    let events = vec![
        Event::new("A", "09:00", "10:00", EventColor::Blue),
        Event::new("B", "09:30", "10:30", EventColor::Green),
        Event::new("early", "04:00", "04:45", EventColor::Grey),
    ];

    let timeline = build_timeline(&events, ClockFormat::TwentyFourHour, &config);
    assert_eq!(timeline.view, ViewRange { start: 4, end: 24 });
    assert_eq!(timeline.hours.len(), 21);
    assert_eq!(timeline.grid_cells, 20);
    assert_eq!(timeline.zones.len(), 3);
    assert_eq!(timeline.cards.len(), 3);

    let early = timeline.cards.iter().find(|card| card.title == "early").unwrap();
    assert_eq!(early.top_px, 0.0);
    let b = timeline.cards.iter().find(|card| card.title == "B").unwrap();
    assert_eq!((b.left_percent, b.width_percent), (50.0, 50.0));
    assert_eq!(b.top_px, 330.0);
}

#[test]
fn out_of_range_hour_text_stays_within_the_day() {
    let config = TimelineConfig::default();
    let events = vec![
        Event::new("corrupt", "-3000000000:00", "3000000000:00", EventColor::Grey),
        Event::new("huge", "9223372036854775807:00", "00:00", EventColor::Blue),
    ];

    let timeline = build_timeline(&events, ClockFormat::TwentyFourHour, &config);
    assert_eq!(timeline.view, ViewRange { start: 0, end: 24 });
    assert_eq!(timeline.hours.len(), 25);
    assert_eq!(timeline.grid_cells, 24);
    assert_eq!(timeline.cards.len(), 2);
    assert!(timeline.cards.iter().any(|card| card.z_index == i64::MAX));
}
