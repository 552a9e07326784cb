//! CSV ingestion

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use super::ColumnMap;
use crate::error::Result;
use crate::models::PatientRecord;

/// Read patient records from a CSV file
pub fn read_csv_file(path: &Path) -> Result<Vec<PatientRecord>> {
    info!("Reading patient records from {}", path.display());
    let file = File::open(path)?;
    read_csv_records(file)
}

/// Read patient records from any CSV source
///
/// Rows shorter than the header are tolerated; their missing cells default
/// like missing columns do.
pub fn read_csv_records<R: Read>(source: R) -> Result<Vec<PatientRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(headers.iter());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(columns.record_from(|index| row.get(index).map(str::to_string)));
    }

    info!("Ingested {} patient records", records.len());
    Ok(records)
}
