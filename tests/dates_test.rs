//! Tests for visit date normalization.

use chrono::{Duration, NaiveDate};
use clinic_insight::config::DateFormatConfig;
use clinic_insight::dates::{month_key, normalize_visit_date, parse_month_key, serial_to_date};
use clinic_insight::error::ClinicInsightError;

#[test]
fn serial_45000_matches_reference_date() {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let reference = epoch + Duration::days(45000);
    assert_eq!(reference, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    assert_eq!(serial_to_date(45000.0), Some(reference));
}

#[test]
fn numeric_string_takes_the_serial_path() {
    let config = DateFormatConfig::default();
    let date = normalize_visit_date("45000", &config).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());

    // Fractional serials carry a time of day; it truncates
    let date = normalize_visit_date("45000.5", &config).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
}

#[test]
fn configured_formats_parse() {
    let config = DateFormatConfig::default();
    let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

    for raw in ["2023-01-15", "15-01-2023", "15/01/2023", "15.01.2023", "15 Jan 2023"] {
        assert_eq!(
            normalize_visit_date(raw, &config).unwrap(),
            expected,
            "failed for {raw:?}"
        );
    }
}

#[test]
fn numeric_input_always_wins_over_string_formats() {
    // A compact all-digit date like "20230115" is numeric, so the serial
    // interpretation applies, not the %Y%m%d format
    let config = DateFormatConfig::default();
    let date = normalize_visit_date("20230115", &config).unwrap();
    assert_ne!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    assert_eq!(date, serial_to_date(20_230_115.0).unwrap());
}

#[test]
fn unparseable_input_is_a_date_parse_error() {
    let config = DateFormatConfig::default();
    let result = normalize_visit_date("sometime last spring", &config);
    assert!(matches!(result, Err(ClinicInsightError::DateParseError(_))));
}

#[test]
fn month_key_round_trips() {
    let date = NaiveDate::from_ymd_opt(2024, 7, 23).unwrap();
    let key = month_key(date);
    assert_eq!(key, "2024-07");
    assert_eq!(
        parse_month_key(&key),
        Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
    );
}
