//! JSON file-backed persistence
//!
//! The analogue of the original dashboard's local-storage layer: the
//! current record list lives under one fixed key and the upload history
//! under another, both as JSON files in a store directory. Loading a key
//! that was never written yields the empty state, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ClinicInsightError, Result};
use crate::models::PatientRecord;

/// File name holding the current record list
pub const RECORDS_KEY: &str = "patient_data.json";

/// File name holding the upload history
pub const HISTORY_KEY: &str = "upload_history.json";

/// One saved snapshot of the record list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Entry identifier, the key for load/delete
    pub id: Uuid,
    /// When the snapshot was saved, RFC 3339
    pub saved_at: String,
    /// Number of records in the snapshot
    pub record_count: usize,
    /// The snapshot itself
    pub records: Vec<PatientRecord>,
}

/// Key-value style store over JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the current record list; empty when never saved
    pub fn load_records(&self) -> Result<Vec<PatientRecord>> {
        self.load_key(RECORDS_KEY)
    }

    /// Persist the current record list
    pub fn save_records(&self, records: &[PatientRecord]) -> Result<()> {
        self.save_key(RECORDS_KEY, &records)?;
        info!("Saved {} records to {}", records.len(), self.dir.display());
        Ok(())
    }

    /// Load the upload history; empty when never saved
    pub fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        self.load_key(HISTORY_KEY)
    }

    /// Snapshot the given records as a new history entry
    ///
    /// Refuses an empty record list, matching the dashboard behavior of
    /// not saving empty uploads.
    pub fn save_to_history(&self, records: &[PatientRecord]) -> Result<HistoryEntry> {
        if records.is_empty() {
            return Err(ClinicInsightError::ValidationError(
                "No records to save to history".to_string(),
            ));
        }

        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            saved_at: Utc::now().to_rfc3339(),
            record_count: records.len(),
            records: records.to_vec(),
        };

        let mut history = self.load_history()?;
        history.push(entry.clone());
        self.save_key(HISTORY_KEY, &history)?;
        info!("Saved history entry {} ({} records)", entry.id, entry.record_count);
        Ok(entry)
    }

    /// Load one history entry by id
    pub fn load_history_entry(&self, id: Uuid) -> Result<HistoryEntry> {
        self.load_history()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or(ClinicInsightError::NotFound(id))
    }

    /// Delete one history entry by id
    pub fn delete_history_entry(&self, id: Uuid) -> Result<()> {
        let mut history = self.load_history()?;
        let before = history.len();
        history.retain(|entry| entry.id != id);
        if history.len() == before {
            return Err(ClinicInsightError::NotFound(id));
        }
        self.save_key(HISTORY_KEY, &history)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn load_key<T: for<'de> Deserialize<'de> + Default>(&self, key: &str) -> Result<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        ensure_store_dir(&self.dir)?;
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), contents)?;
        Ok(())
    }
}

/// Ensure the store directory exists and is a directory
fn ensure_store_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ClinicInsightError::IoError(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Store path is not a directory: {}", dir.display()),
        )));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
