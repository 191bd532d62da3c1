use chrono::{TimeZone, Utc};
use veem_client::presentation::serialization::parse_datetime;

#[test]
fn test_parse_rfc3339() {
    assert_eq!(
        parse_datetime("2024-03-01T10:00:00Z"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    );
    assert_eq!(
        parse_datetime("2024-03-01T12:00:00+02:00"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_compact_offset() {
    assert_eq!(
        parse_datetime("2024-03-01T10:00:00.000+0000"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_naive_and_date_only() {
    assert_eq!(
        parse_datetime("2024-03-01T10:00:00"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    );
    assert_eq!(
        parse_datetime("2024-03-01"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_epoch_millis() {
    assert_eq!(
        parse_datetime("1709287200000"),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_garbage() {
    assert_eq!(parse_datetime(""), None);
    assert_eq!(parse_datetime("   "), None);
    assert_eq!(parse_datetime("next tuesday"), None);
}
