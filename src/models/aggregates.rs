//! Aggregate value types produced by the analysis pipeline
//!
//! All three are immutable snapshots computed fresh on every aggregation
//! pass; none of them is shared or mutated across calls.

use serde::{Deserialize, Serialize};

/// Patient count for one residential area
///
/// For a given input list the counts partition the records exactly: every
/// area appears at most once and the counts sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCount {
    /// Area label, verbatim from the records
    pub area: String,
    /// Number of records carrying that label
    pub count: u64,
}

/// Patient count for one (month, area) bucket
///
/// Zero-count buckets are never materialized; a missing pair means zero.
/// `month_key` is the canonical `YYYY-MM` form, or the reserved
/// [`crate::dates::INVALID_MONTH_KEY`] sentinel for records whose visit
/// date could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Month bucket in `YYYY-MM` form
    pub month_key: String,
    /// Area label
    pub area: String,
    /// Number of records in the bucket, always at least one
    pub count: u64,
}

/// One projected monthly value from the growth forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Projected month in `YYYY-MM` form
    pub month_key: String,
    /// Projected patient count, rounded to the nearest integer
    pub predicted_count: i64,
}
