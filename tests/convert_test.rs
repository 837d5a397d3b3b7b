use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use datewise::error::DateError;
use datewise::{iso, to_date, DateInput};

#[test]
fn test_ten_char_utc() {
    let d = to_date("2025-02-11", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 0, 0, 0).unwrap());
}

#[test]
fn test_ten_char_local_fields() {
    // Local interpretation keeps the written fields whatever the host zone.
    let d = to_date("2025-02-11", false).unwrap();
    let expected = NaiveDate::from_ymd_opt(2025, 2, 11).unwrap().and_time(NaiveTime::MIN);
    assert_eq!(d.naive_local(), expected);
}

#[test]
fn test_sixteen_char() {
    let d = to_date("2025-02-11 09:22", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 9, 22, 0).unwrap());
}

#[test]
fn test_sixteen_char_t_separator() {
    let d = to_date("2025-02-11T09:22", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 9, 22, 0).unwrap());
}

#[test]
fn test_nineteen_char() {
    let d = to_date("2025-02-11 09:22:13", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 9, 22, 13).unwrap());
}

#[test]
fn test_fractional_seconds_truncated() {
    let d = to_date("2025-02-11 09:22:13.5678", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 9, 22, 13).unwrap());
}

#[test]
fn test_fractional_seconds_beats_24_char_rule() {
    // 24 characters long, but the dot at position 19 wins.
    let d = to_date("2025-02-11T09:22:13.123Z", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 9, 22, 13).unwrap());
}

#[test]
fn test_offset_qualified() {
    let d = to_date("2025-02-11T09:22:13-0500", true).unwrap();
    assert_eq!(d, Utc.with_ymd_and_hms(2025, 2, 11, 14, 22, 13).unwrap());
    // The canonical value keeps the offset it was written in.
    assert_eq!(iso(d, true, true, false).unwrap(), "2025-02-11 09:22:13");
}

#[test]
fn test_timestamp_input() {
    let d = to_date(1_700_000_000i64, true).unwrap();
    assert_eq!(d, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
}

#[test]
fn test_value_passthrough() {
    let value = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap().fixed_offset();
    // The utc flag only matters for text.
    assert_eq!(to_date(value, false).unwrap(), value);
    assert_eq!(to_date(value, true).unwrap(), value);
}

#[test]
fn test_round_trip_layouts() {
    // Formatting the coerced value back through iso reproduces the fields
    // for every recognized layout.
    assert_eq!(
        iso(to_date("2025-02-11", true).unwrap(), false, true, false).unwrap(),
        "2025-02-11"
    );
    assert_eq!(
        iso(to_date("2025-02-11 09:22", true).unwrap(), true, true, false).unwrap(),
        "2025-02-11 09:22:00"
    );
    assert_eq!(
        iso(to_date("2025-02-11 09:22:13", true).unwrap(), true, true, false).unwrap(),
        "2025-02-11 09:22:13"
    );
    assert_eq!(
        iso(to_date("2025-02-11 09:22:13.5678", true).unwrap(), true, true, false).unwrap(),
        "2025-02-11 09:22:13"
    );
    assert_eq!(
        iso(to_date("2025-02-11T09:22:13-0500", true).unwrap(), true, true, false).unwrap(),
        "2025-02-11 09:22:13"
    );
}

#[test]
fn test_round_trip_local() {
    assert_eq!(
        iso(to_date("2025-02-11 09:22:13", false).unwrap(), true, false, false).unwrap(),
        "2025-02-11 09:22:13"
    );
}

#[test]
fn test_invalid_lengths() {
    for text in ["2025-02-11 0", "", "2025", "2025-02-11T09:22:13Z", "not a date at all, clearly"] {
        let err = to_date(text, true).unwrap_err();
        assert!(matches!(err, DateError::InvalidInput(_)), "{text:?} gave {err:?}");
    }
}

#[test]
fn test_invalid_fields_at_valid_length() {
    assert!(matches!(
        to_date("aaaa-bb-cc", true).unwrap_err(),
        DateError::InvalidInput(_)
    ));
    assert!(matches!(
        to_date("2025-13-45 99:99:99", true).unwrap_err(),
        DateError::InvalidInput(_)
    ));
}

#[test]
fn test_error_names_the_string() {
    let err = to_date("2025-02-11 0", true).unwrap_err();
    assert!(err.to_string().contains("2025-02-11 0"));
}

#[test]
fn test_from_impls() {
    assert!(matches!(DateInput::from(12i64), DateInput::Timestamp(12)));
    assert!(matches!(DateInput::from("2025-02-11"), DateInput::Text(_)));
    assert!(matches!(DateInput::from(Utc::now()), DateInput::Value(_)));
}
