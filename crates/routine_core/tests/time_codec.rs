use routine_core::time::{
    compose_canonical, decode_hour, encode_hour, encode_stored_range, format_canonical,
    format_stored_time, parse_canonical, resolve_end, split_for_form, ClockFormat, FormTime,
    Meridiem,
};

const ONE_MINUTE: f64 = 1.0 / 60.0;

#[test]
fn decode_applies_twelve_hour_convention() {
    assert_eq!(decode_hour("12:00 AM"), 0.0);
    assert_eq!(decode_hour("12:30 PM"), 12.5);
    assert_eq!(decode_hour("1:45 pm"), 13.75);
    assert_eq!(decode_hour("11:59 Am"), 11.0 + 59.0 / 60.0);
    assert_eq!(decode_hour(" 07:05 "), 7.0 + 5.0 / 60.0);
}

#[test]
fn decode_never_fails() {
    for text in ["", "  ", "pm", "25", "xx:10", "10:yy", "::", "10-30"] {
        let value = decode_hour(text);
        assert!(value.is_finite());
        assert_eq!(value, 0.0, "`{text}` should fall back to zero");
    }
}

#[test]
fn encode_twenty_four_hour() {
    let clock = ClockFormat::TwentyFourHour;
    assert_eq!(encode_hour(0.0, clock), "00:00");
    assert_eq!(encode_hour(24.0, clock), "00:00");
    assert_eq!(encode_hour(9.5, clock), "09:30");
    assert_eq!(encode_hour(13.25, clock), "13:15");
}

#[test]
fn encode_twelve_hour() {
    let clock = ClockFormat::TwelveHour;
    assert_eq!(encode_hour(0.0, clock), "12:00 AM");
    assert_eq!(encode_hour(9.0, clock), "9:00 AM");
    assert_eq!(encode_hour(12.0, clock), "12:00 PM");
    assert_eq!(encode_hour(13.5, clock), "1:30 PM");
    assert_eq!(encode_hour(24.0, clock), "12:00 AM");
}

#[test]
fn decode_encode_roundtrip_within_a_minute() {
    for clock in [ClockFormat::TwentyFourHour, ClockFormat::TwelveHour] {
        for minutes in 0..24 * 60 {
            let text = format_canonical(minutes / 60, minutes % 60);
            let decoded = decode_hour(&text);
            let again = decode_hour(&encode_hour(decoded, clock));
            assert!(
                (again - decoded).abs() < ONE_MINUTE,
                "{text} drifted to {again} in {clock:?}"
            );
        }
    }
}

#[test]
fn stored_text_is_shown_unchanged_in_twenty_four_hour_mode() {
    assert_eq!(
        format_stored_time("07:05", ClockFormat::TwentyFourHour),
        "07:05"
    );
    assert_eq!(
        encode_stored_range("09:00", "17:30", ClockFormat::TwentyFourHour),
        "09:00 - 17:30"
    );
}

#[test]
fn stored_range_in_twelve_hour_mode() {
    assert_eq!(
        encode_stored_range("09:00", "17:30", ClockFormat::TwelveHour),
        "9:00 AM - 5:30 PM"
    );
    assert_eq!(
        encode_stored_range("23:00", "00:00", ClockFormat::TwelveHour),
        "11:00 PM - 12:00 AM"
    );
}

#[test]
fn midnight_wraparound_only_after_nonzero_start() {
    assert_eq!(resolve_end(23.0, 0.0), 24.0);
    assert_eq!(resolve_end(0.0, 0.0), 0.0);
    assert_eq!(resolve_end(9.0, 10.0), 10.0);
}

#[test]
fn canonical_parse_is_strict() {
    assert_eq!(parse_canonical("09:30"), Some((9, 30)));
    assert_eq!(parse_canonical("00:00"), Some((0, 0)));
    assert_eq!(parse_canonical("23:59"), Some((23, 59)));
    assert_eq!(parse_canonical("24:00"), None);
    assert_eq!(parse_canonical("9:30"), None);
    assert_eq!(parse_canonical("09:60"), None);
    assert_eq!(parse_canonical("09:30 PM"), None);
}

#[test]
fn stored_text_splits_into_form_fields() {
    assert_eq!(
        split_for_form("13:05", ClockFormat::TwelveHour),
        FormTime {
            hour: 1,
            minute: 5,
            meridiem: Some(Meridiem::Pm),
        }
    );
    assert_eq!(
        split_for_form("00:30", ClockFormat::TwelveHour),
        FormTime {
            hour: 12,
            minute: 30,
            meridiem: Some(Meridiem::Am),
        }
    );
    assert_eq!(
        split_for_form("13:05", ClockFormat::TwentyFourHour),
        FormTime {
            hour: 13,
            minute: 5,
            meridiem: None,
        }
    );
}

#[test]
fn form_fields_compose_canonical_text() {
    let twelve = ClockFormat::TwelveHour;
    let midnight = FormTime::from_inputs("12", "00", Some(Meridiem::Am));
    assert_eq!(compose_canonical(midnight, twelve), "00:00");

    let afternoon = FormTime::from_inputs("1", "5", Some(Meridiem::Pm));
    assert_eq!(compose_canonical(afternoon, twelve), "13:05");

    let noon = FormTime::from_inputs("12", "15", Some(Meridiem::Pm));
    assert_eq!(compose_canonical(noon, twelve), "12:15");

    let blank = FormTime::from_inputs("", "abc", None);
    assert_eq!(compose_canonical(blank, ClockFormat::TwentyFourHour), "00:00");
    assert_eq!(
        blank.padded_fields(),
        ("00".to_string(), "00".to_string())
    );
}

#[test]
fn form_roundtrip_preserves_stored_text() {
    for clock in [ClockFormat::TwentyFourHour, ClockFormat::TwelveHour] {
        for text in ["00:00", "06:45", "12:00", "12:30", "18:05", "23:59"] {
            assert_eq!(compose_canonical(split_for_form(text, clock), clock), text);
        }
    }
}

#[test]
fn hour_input_bounds_follow_mode() {
    assert_eq!(ClockFormat::TwentyFourHour.hour_input_bounds(), (0, 23));
    assert_eq!(ClockFormat::TwelveHour.hour_input_bounds(), (1, 12));
    assert_eq!(ClockFormat::from_use_24h(false), ClockFormat::TwelveHour);
}
