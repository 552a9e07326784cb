//! Visit date normalization
//!
//! Converts the heterogeneous raw visit date cell (spreadsheet serial
//! number or free-form date string) into a canonical calendar date, and
//! derives the `YYYY-MM` month key used for time bucketing. Dates are
//! treated as calendar dates, not instants; no timezone conversion applies.

use chrono::{Duration, NaiveDate};
use log::warn;

use crate::config::DateFormatConfig;
use crate::error::{ClinicInsightError, Result};

/// Reserved month key for records whose visit date could not be normalized.
///
/// The aggregation step buckets such records here instead of failing, so a
/// malformed date degrades to one visible bucket rather than aborting the
/// pipeline.
pub const INVALID_MONTH_KEY: &str = "invalid";

/// Day-count epoch for spreadsheet serial dates.
///
/// 1899-12-30 is the historical off-by-two spreadsheet convention
/// (including the leap-year error baked into that epoch choice). Ingested
/// files use it, so it is reproduced exactly rather than corrected.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("1899-12-30 is a valid calendar date")
}

/// Normalize a raw visit date cell into a calendar date
///
/// Numeric input is interpreted as a serial day-count from the spreadsheet
/// epoch (fractional day parts, i.e. time-of-day, are truncated). Anything
/// else is parsed against the configured date formats, then against
/// heuristically detected formats.
pub fn normalize_visit_date(raw: &str, config: &DateFormatConfig) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(serial) = trimmed.parse::<f64>() {
        return serial_to_date(serial)
            .ok_or_else(|| ClinicInsightError::DateParseError(raw.to_string()));
    }

    parse_date_string(trimmed, config)
        .ok_or_else(|| ClinicInsightError::DateParseError(raw.to_string()))
}

/// Convert a spreadsheet serial number to a calendar date
///
/// Returns `None` when the serial is not finite or the resulting date falls
/// outside chrono's representable range.
#[must_use]
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.trunc() as i64;
    let delta = Duration::try_days(days)?;
    serial_epoch().checked_add_signed(delta)
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    // Try all the provided formats
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // If enabled, try to detect the format based on string patterns
    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, &detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<String> {
    // Check for ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d".to_string());
    }

    // Check for slashes
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d".to_string()); // YYYY/MM/DD
            } else if parts[2].len() == 4 {
                // Check if first part is likely day or month
                if let Ok(first_num) = parts[0].parse::<u8>() {
                    if first_num > 12 {
                        return Some("%d/%m/%Y".to_string()); // DD/MM/YYYY
                    }
                    // Could be either MM/DD/YYYY or DD/MM/YYYY
                    // Default to European format, but this might need context-specific logic
                    return Some("%d/%m/%Y".to_string());
                }
            }
        }
    }

    // Check for dots (DD.MM.YYYY)
    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y".to_string());
        }
    }

    // Check for compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d".to_string());
    }

    // No recognized format
    None
}

/// Format a calendar date as a `YYYY-MM` month key
///
/// Zero-padded and year-first, so lexicographic order is chronological.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Derive the month key for a raw visit date, degrading on failure
///
/// Unparseable dates land in the [`INVALID_MONTH_KEY`] bucket with a
/// warning; the aggregation pipeline never fails on a malformed date.
#[must_use]
pub fn month_key_or_invalid(raw: &str, config: &DateFormatConfig) -> String {
    match normalize_visit_date(raw, config) {
        Ok(date) => month_key(date),
        Err(_) => {
            warn!("Unparseable visit date {raw:?}, bucketing as {INVALID_MONTH_KEY:?}");
            INVALID_MONTH_KEY.to_string()
        }
    }
}

/// Parse a `YYYY-MM` month key back into the first day of that month
///
/// Returns `None` for anything that is not a well-formed month key,
/// including the [`INVALID_MONTH_KEY`] sentinel.
#[must_use]
pub fn parse_month_key(key: &str) -> Option<NaiveDate> {
    let (year, month) = key.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
