//! Configuration for the clinic-insight pipeline.

use crate::analysis::forecast::{FORECAST_HORIZON, GROWTH_RATE};

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing visit dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d/%m/%Y".to_string(), // UK: 15/01/2023
                "%d.%m.%Y".to_string(), // German/Danish: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
            ],
            enable_format_detection: true,
        }
    }
}

/// Configuration for the analysis pipeline
#[derive(Debug, Clone)]
pub struct ClinicInsightConfig {
    /// Date format configuration for visit date normalization
    pub date_format_config: DateFormatConfig,
    /// Number of monthly forecast points to project
    pub forecast_horizon: u32,
    /// Per-step growth rate applied to the forecast base value
    pub growth_rate: f64,
}

impl Default for ClinicInsightConfig {
    fn default() -> Self {
        Self {
            date_format_config: DateFormatConfig::default(),
            forecast_horizon: FORECAST_HORIZON,
            growth_rate: GROWTH_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_date_formats() {
        let config = DateFormatConfig::default();
        assert!(!config.date_formats.is_empty());
        assert!(config.enable_format_detection);
        // ISO is the first format tried
        assert_eq!(config.date_formats[0], "%Y-%m-%d");
    }

    #[test]
    fn test_default_forecast_parameters() {
        let config = ClinicInsightConfig::default();
        assert_eq!(config.forecast_horizon, 6);
        assert!((config.growth_rate - 0.1).abs() < f64::EPSILON);
    }
}
