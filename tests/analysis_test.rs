//! Tests for the aggregation, recommendation, and forecast pipeline.

use clinic_insight::config::DateFormatConfig;
use clinic_insight::{
    AreaCount, PatientRecord, TimeSeriesPoint, area_counts, best_area, forecast, time_series,
};

fn record(name: &str, area: &str, visit_date: &str) -> PatientRecord {
    PatientRecord::new(
        name.to_string(),
        34,
        "F".to_string(),
        area.to_string(),
        visit_date.to_string(),
    )
}

fn point(month_key: &str, area: &str, count: u64) -> TimeSeriesPoint {
    TimeSeriesPoint {
        month_key: month_key.to_string(),
        area: area.to_string(),
        count,
    }
}

#[test]
fn area_counts_partition_the_input() {
    let records = vec![
        record("Ada", "North", "2024-01-05"),
        record("Ben", "South", "2024-01-06"),
        record("Casper", "North", "2024-02-10"),
        record("Dina", "North", "2024-02-11"),
        record("Erik", "East", "2024-03-01"),
    ];

    let counts = area_counts(&records);

    let total: u64 = counts.iter().map(|c| c.count).sum();
    assert_eq!(total as usize, records.len());

    // Each area appears exactly once
    let mut areas: Vec<&str> = counts.iter().map(|c| c.area.as_str()).collect();
    areas.sort_unstable();
    areas.dedup();
    assert_eq!(areas.len(), counts.len());

    // First-occurrence insertion order
    assert_eq!(counts[0].area, "North");
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].area, "South");
    assert_eq!(counts[2].area, "East");
}

#[test]
fn time_series_partitions_the_input() {
    let records = vec![
        record("Ada", "North", "2024-01-05"),
        record("Ben", "North", "2024-01-20"),
        record("Casper", "South", "2024-01-06"),
        record("Dina", "North", "2024-02-10"),
        record("Erik", "West", "garbage date"),
    ];

    let series = time_series(&records, &DateFormatConfig::default());

    let total: u64 = series.iter().map(|p| p.count).sum();
    assert_eq!(total as usize, records.len());

    // (month, area) buckets tally correctly; the malformed date degrades
    // to the sentinel bucket instead of failing
    assert!(series.contains(&point("2024-01", "North", 2)));
    assert!(series.contains(&point("2024-01", "South", 1)));
    assert!(series.contains(&point("2024-02", "North", 1)));
    assert!(series.contains(&point(clinic_insight::INVALID_MONTH_KEY, "West", 1)));
}

#[test]
fn best_area_first_max_wins() {
    let counts = vec![
        AreaCount {
            area: "A".to_string(),
            count: 5,
        },
        AreaCount {
            area: "B".to_string(),
            count: 5,
        },
        AreaCount {
            area: "C".to_string(),
            count: 3,
        },
    ];

    let best = best_area(&counts).expect("non-empty input");
    assert_eq!(best.area, "A");
    assert_eq!(best.count, 5);
}

#[test]
fn empty_input_is_safe_everywhere() {
    let config = DateFormatConfig::default();
    assert!(area_counts(&[]).is_empty());
    assert!(time_series(&[], &config).is_empty());
    assert_eq!(best_area(&[]), None);
    assert!(forecast(&[], "X").is_empty());
}

#[test]
fn forecast_arithmetic_from_single_point() {
    let series = vec![point("2024-01", "X", 100)];

    let projected = forecast(&series, "X");
    assert_eq!(projected.len(), 6);

    let expected = [
        ("2024-02", 110),
        ("2024-03", 120),
        ("2024-04", 130),
        ("2024-05", 140),
        ("2024-06", 150),
        ("2024-07", 160),
    ];
    for (actual, (month, predicted)) in projected.iter().zip(expected) {
        assert_eq!(actual.month_key, month);
        assert_eq!(actual.predicted_count, predicted);
    }
}

#[test]
fn forecast_growth_is_on_the_base_not_compounded() {
    // round(100 * 1.1^6) would be 177; the linear model gives 160
    let series = vec![point("2024-01", "X", 100)];
    let projected = forecast(&series, "X");
    assert_eq!(projected[5].predicted_count, 160);
}

#[test]
fn forecast_bases_on_last_element_not_latest_month() {
    // The final element (2024-01, count 40) is chronologically earlier
    // than the 2024-06 bucket before it; the projection must still start
    // from it
    let series = vec![
        point("2024-06", "X", 90),
        point("2024-01", "X", 40),
    ];

    let projected = forecast(&series, "X");
    assert_eq!(projected.len(), 6);
    assert_eq!(projected[0].month_key, "2024-02");
    assert_eq!(projected[0].predicted_count, 44); // round(40 * 1.1)
    assert_eq!(projected[5].month_key, "2024-07");
    assert_eq!(projected[5].predicted_count, 64); // round(40 * 1.6)
}

#[test]
fn forecast_filters_to_the_requested_area() {
    let series = vec![
        point("2024-01", "X", 100),
        point("2024-03", "Y", 10),
    ];

    let projected = forecast(&series, "Y");
    assert_eq!(projected[0].month_key, "2024-04");
    assert_eq!(projected[0].predicted_count, 11);
}
