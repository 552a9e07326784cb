//! A Rust library for analyzing tabular patient visit records: per-area
//! aggregation, month-bucketed time series, a clinic-siting recommendation,
//! and a naive linear growth forecast.

pub mod analysis;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod registry;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::{ClinicInsightConfig, DateFormatConfig};
pub use error::{ClinicInsightError, Result};
pub use models::{AreaCount, ForecastPoint, PatientRecord, TimeSeriesPoint};

// Analysis pipeline
pub use analysis::{area_counts, best_area, forecast, time_series};

// Application state and persistence
pub use registry::PatientRegistry;
pub use store::{HistoryEntry, JsonStore};

// Date normalization
pub use dates::{INVALID_MONTH_KEY, month_key, normalize_visit_date};
