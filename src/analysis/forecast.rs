//! Naive patient growth forecast
//!
//! Projects future monthly counts for one area from the last observed
//! bucket, using a fixed growth rate on the base value. This is a
//! deliberately simple placeholder for a real forecasting model and is
//! reproduced as-is rather than upgraded.

use chrono::Months;
use log::warn;

use crate::dates::{month_key, parse_month_key};
use crate::models::{ForecastPoint, TimeSeriesPoint};

/// Number of monthly points a forecast projects
pub const FORECAST_HORIZON: u32 = 6;

/// Per-step growth rate applied to the forecast base value
pub const GROWTH_RATE: f64 = 0.1;

/// Forecast the next six monthly counts for an area
///
/// Filters the series to the given area and projects from the **last
/// matching element in input iteration order**, not the chronologically
/// latest. Call sites do not pre-sort, and changing the base selection
/// would change their output, so this selection is kept exactly.
///
/// Step `i` predicts `round(base * (1 + 0.1 * i))`: the growth applies to
/// the base each step, it does not compound on the prior prediction.
/// Returns exactly six points, or none when the area has no data.
#[must_use]
pub fn forecast(series: &[TimeSeriesPoint], area: &str) -> Vec<ForecastPoint> {
    forecast_with(series, area, FORECAST_HORIZON, GROWTH_RATE)
}

/// Forecast with an explicit horizon and growth rate
#[must_use]
pub fn forecast_with(
    series: &[TimeSeriesPoint],
    area: &str,
    horizon: u32,
    growth_rate: f64,
) -> Vec<ForecastPoint> {
    let Some(last) = series.iter().filter(|p| p.area == area).next_back() else {
        return Vec::new();
    };

    let Some(base_month) = parse_month_key(&last.month_key) else {
        // Only reachable when the base bucket is the invalid-date sentinel;
        // there is no calendar to project forward from.
        warn!(
            "Forecast base bucket {:?} for area {area:?} has no calendar month, skipping projection",
            last.month_key
        );
        return Vec::new();
    };

    let base_value = last.count as f64;
    let mut points = Vec::with_capacity(horizon as usize);

    for i in 1..=horizon {
        let Some(month) = base_month.checked_add_months(Months::new(i)) else {
            warn!("Forecast month overflow past {}", last.month_key);
            break;
        };
        let predicted = (base_value * (1.0 + growth_rate * f64::from(i))).round() as i64;
        points.push(ForecastPoint {
            month_key: month_key(month),
            predicted_count: predicted,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month_key: &str, area: &str, count: u64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            month_key: month_key.to_string(),
            area: area.to_string(),
            count,
        }
    }

    #[test]
    fn test_year_rollover() {
        let series = vec![point("2023-10", "X", 50)];
        let projected = forecast(&series, "X");
        let months: Vec<&str> = projected.iter().map(|p| p.month_key.as_str()).collect();
        assert_eq!(
            months,
            ["2023-11", "2023-12", "2024-01", "2024-02", "2024-03", "2024-04"]
        );
    }

    #[test]
    fn test_sentinel_base_yields_empty() {
        let series = vec![point(crate::dates::INVALID_MONTH_KEY, "X", 50)];
        assert!(forecast(&series, "X").is_empty());
    }

    #[test]
    fn test_unknown_area_yields_empty() {
        let series = vec![point("2024-01", "X", 50)];
        assert!(forecast(&series, "Y").is_empty());
    }
}
