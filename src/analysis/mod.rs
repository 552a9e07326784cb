//! Analysis pipeline for patient visit records
//!
//! Pure transformations over in-memory record sequences: per-area tallies,
//! month-bucketed time series, the best-area recommendation, and the naive
//! growth forecast. None of these hold state across calls.

pub mod aggregation;
pub mod forecast;
pub mod recommend;

pub use aggregation::{area_counts, time_series, unique_areas};
pub use forecast::{FORECAST_HORIZON, GROWTH_RATE, forecast, forecast_with};
pub use recommend::best_area;
