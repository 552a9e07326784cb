//! Application state for patient records
//!
//! `PatientRegistry` owns the in-memory record list and keys all edit and
//! delete operations on the synthetic record id. This replaces the
//! original dashboard's ambient shared state and its reference-identity
//! record matching: callers receive the registry explicitly, and two
//! structurally identical records can never be confused.

use log::info;
use uuid::Uuid;

use crate::error::{ClinicInsightError, Result};
use crate::models::PatientRecord;

/// Owned collection of patient records with id-keyed mutation
#[derive(Debug, Clone, Default)]
pub struct PatientRegistry {
    records: Vec<PatientRecord>,
}

impl PatientRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry over an already-ingested record list
    #[must_use]
    pub fn from_records(records: Vec<PatientRecord>) -> Self {
        Self { records }
    }

    /// All records, in insertion order
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one record by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&PatientRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replace the whole record list, e.g. after a fresh file upload
    pub fn replace_all(&mut self, records: Vec<PatientRecord>) {
        info!("Replacing registry contents with {} records", records.len());
        self.records = records;
    }

    /// Add a manually entered record after validating it
    ///
    /// Returns the new record's id. Ingested files bypass this path; the
    /// pipeline performs no field validation on uploaded data.
    pub fn add(&mut self, record: PatientRecord) -> Result<Uuid> {
        validate_record(&record)?;
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    /// Replace the fields of an existing record, keeping its id
    pub fn update(&mut self, id: Uuid, updated: PatientRecord) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ClinicInsightError::NotFound(id))?;
        *record = PatientRecord { id, ..updated };
        Ok(())
    }

    /// Remove a record by id, returning it
    pub fn remove(&mut self, id: Uuid) -> Result<PatientRecord> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(ClinicInsightError::NotFound(id))?;
        Ok(self.records.remove(position))
    }
}

/// Manual-entry validation: every field present, age positive
pub fn validate_record(record: &PatientRecord) -> Result<()> {
    if record.name.is_empty() {
        return Err(ClinicInsightError::ValidationError(
            "Patient name is required".to_string(),
        ));
    }
    if record.age <= 0 {
        return Err(ClinicInsightError::ValidationError(
            "Age must be a positive number".to_string(),
        ));
    }
    if record.gender.is_empty() {
        return Err(ClinicInsightError::ValidationError(
            "Gender is required".to_string(),
        ));
    }
    if record.area.is_empty() {
        return Err(ClinicInsightError::ValidationError(
            "Area is required".to_string(),
        ));
    }
    if record.visit_date.is_empty() {
        return Err(ClinicInsightError::ValidationError(
            "Visit date is required".to_string(),
        ));
    }
    Ok(())
}
