//! Record aggregation
//!
//! Tallies the flat record list into per-area counts and per-(month, area)
//! time-series buckets. Both outputs are emitted in first-occurrence order;
//! the contract leaves ordering unspecified, so consumers needing a
//! particular order (count-descending for charts, chronological for series)
//! sort explicitly. Month keys sort chronologically as plain strings since
//! they are zero-padded and year-first.

use std::collections::hash_map::Entry;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::config::DateFormatConfig;
use crate::dates::month_key_or_invalid;
use crate::models::{AreaCount, PatientRecord, TimeSeriesPoint};

/// Tally records per residential area
///
/// Single pass over the input; the area label is counted verbatim, with no
/// trimming or case folding, so an empty-string area is a valid, distinct
/// bucket. The counts partition the input: they sum to `records.len()` and
/// each area appears exactly once.
#[must_use]
pub fn area_counts(records: &[PatientRecord]) -> Vec<AreaCount> {
    let mut counts: Vec<AreaCount> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for record in records {
        match index.entry(record.area.as_str()) {
            Entry::Occupied(entry) => counts[*entry.get()].count += 1,
            Entry::Vacant(entry) => {
                entry.insert(counts.len());
                counts.push(AreaCount {
                    area: record.area.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Tally records per (month, area) bucket
///
/// The month key comes from normalizing each record's raw visit date; a
/// date that cannot be normalized degrades to the reserved
/// [`crate::dates::INVALID_MONTH_KEY`] bucket with a warning instead of
/// failing the pass. The counts sum to `records.len()`.
#[must_use]
pub fn time_series(records: &[PatientRecord], config: &DateFormatConfig) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = Vec::new();
    let mut index: FxHashMap<(String, String), usize> = FxHashMap::default();

    for record in records {
        let month = month_key_or_invalid(&record.visit_date, config);
        match index.entry((month, record.area.clone())) {
            Entry::Occupied(entry) => points[*entry.get()].count += 1,
            Entry::Vacant(entry) => {
                let (month_key, area) = entry.key().clone();
                entry.insert(points.len());
                points.push(TimeSeriesPoint {
                    month_key,
                    area,
                    count: 1,
                });
            }
        }
    }

    points
}

/// Distinct area labels present in a time series, in first-occurrence order
///
/// Used by presentation layers to populate an area selector.
#[must_use]
pub fn unique_areas(series: &[TimeSeriesPoint]) -> Vec<String> {
    series.iter().map(|p| p.area.clone()).unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormatConfig;
    use crate::dates::INVALID_MONTH_KEY;

    fn record(area: &str, visit_date: &str) -> PatientRecord {
        PatientRecord::new(
            "Test Patient".to_string(),
            30,
            "F".to_string(),
            area.to_string(),
            visit_date.to_string(),
        )
    }

    #[test]
    fn test_empty_area_is_a_distinct_bucket() {
        let records = vec![
            record("North", "2024-01-05"),
            record("", "2024-01-06"),
            record("North ", "2024-01-07"),
        ];
        let counts = area_counts(&records);
        // Verbatim tallying: "", "North" and "North " are three buckets
        assert_eq!(counts.len(), 3);
        assert!(counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_malformed_date_degrades_to_sentinel() {
        let records = vec![record("North", "not a date")];
        let series = time_series(&records, &DateFormatConfig::default());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month_key, INVALID_MONTH_KEY);
        assert_eq!(series[0].count, 1);
    }
}
