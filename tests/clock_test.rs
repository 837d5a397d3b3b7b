use chrono::{TimeZone, Utc};
use datewise::{timestamp, DateInput};

#[test]
fn test_timestamp_now() {
    let t = timestamp(None, true).unwrap();
    let now = Utc::now().timestamp();
    assert!((now - t).abs() <= 1, "{t} vs {now}");
}

#[test]
fn test_timestamp_of_text() {
    let t = timestamp(Some(DateInput::Text("2025-02-11")), true).unwrap();
    let expected = Utc.with_ymd_and_hms(2025, 2, 11, 0, 0, 0).unwrap().timestamp();
    assert_eq!(t, expected);
}

#[test]
fn test_timestamp_of_timestamp() {
    let t = timestamp(Some(DateInput::Timestamp(1_700_000_000)), true).unwrap();
    assert_eq!(t, 1_700_000_000);
}

#[test]
fn test_timestamp_of_value() {
    let value = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let t = timestamp(Some(value.into()), false).unwrap();
    assert_eq!(t, value.timestamp());
}
