//! Error handling for the clinic-insight pipeline.

use std::{fmt, io};
use uuid::Uuid;

/// Specialized error type for clinic-insight operations
#[derive(Debug)]
pub enum ClinicInsightError {
    /// Error opening or reading a file
    IoError(io::Error),
    /// Error reading or writing CSV data
    CsvError(csv::Error),
    /// Error reading spreadsheet data
    SpreadsheetError(calamine::Error),
    /// Error serializing or deserializing JSON snapshots
    SerializationError(serde_json::Error),
    /// A visit date that could not be normalized
    DateParseError(String),
    /// A record or history entry lookup that did not match anything
    NotFound(Uuid),
    /// A record that failed manual-entry validation
    ValidationError(String),
}

impl From<io::Error> for ClinicInsightError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<csv::Error> for ClinicInsightError {
    fn from(error: csv::Error) -> Self {
        Self::CsvError(error)
    }
}

impl From<calamine::Error> for ClinicInsightError {
    fn from(error: calamine::Error) -> Self {
        Self::SpreadsheetError(error)
    }
}

impl From<serde_json::Error> for ClinicInsightError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError(error)
    }
}

impl fmt::Display for ClinicInsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::CsvError(e) => write!(f, "CSV error: {e}"),
            Self::SpreadsheetError(e) => write!(f, "Spreadsheet error: {e}"),
            Self::SerializationError(e) => write!(f, "Serialization error: {e}"),
            Self::DateParseError(raw) => write!(f, "Unparseable visit date: {raw:?}"),
            Self::NotFound(id) => write!(f, "No record with id {id}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ClinicInsightError {}

/// Result type for clinic-insight operations
pub type Result<T> = std::result::Result<T, ClinicInsightError>;
