//! Domain models for patient visit analytics
//!
//! This module contains the patient record entity plus the aggregate value
//! types produced by the analysis pipeline.

pub mod aggregates;
pub mod patient;

// Re-export commonly used types
pub use aggregates::{AreaCount, ForecastPoint, TimeSeriesPoint};
pub use patient::PatientRecord;
