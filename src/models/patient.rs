//! Patient record entity model
//!
//! A `PatientRecord` is one visit/patient entry as ingested from a tabular
//! source. The analysis pipeline only ever reads its fields; mutation goes
//! through the [`crate::registry::PatientRegistry`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One patient visit entry
///
/// The five tabular fields are stored verbatim: `area` is a free-text label
/// (case- and whitespace-sensitive, no normalization) and `visit_date` keeps
/// the raw cell value, which may be a date string in one of several formats
/// or a spreadsheet serial number. Normalization happens lazily in the
/// aggregation step, see [`crate::dates`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Synthetic identifier assigned at ingestion; the stable key for
    /// edit/delete operations. Snapshots written before this field existed
    /// deserialize with a fresh id.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Patient name
    pub name: String,
    /// Age in years; zero when the source cell was missing or non-numeric
    pub age: i32,
    /// Gender as recorded in the source
    pub gender: String,
    /// Residential area label
    pub area: String,
    /// Raw visit date cell value
    pub visit_date: String,
}

impl PatientRecord {
    /// Create a new record with a fresh synthetic id
    #[must_use]
    pub fn new(name: String, age: i32, gender: String, area: String, visit_date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            age,
            gender,
            area,
            visit_date,
        }
    }

    /// Field-for-field equality ignoring the synthetic id
    ///
    /// Used by round-trip checks: export drops the id and re-ingestion
    /// assigns a new one.
    #[must_use]
    pub fn same_fields(&self, other: &Self) -> bool {
        self.name == other.name
            && self.age == other.age
            && self.gender == other.gender
            && self.area == other.area
            && self.visit_date == other.visit_date
    }
}
