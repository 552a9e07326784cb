//! Tabular export of patient records
//!
//! Writes the record list back out with exactly the five ingestion columns
//! in order, the inverse of the ingestion mapping. The synthetic record id
//! is not exported; re-ingesting an exported file assigns fresh ids.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use log::info;

use crate::error::Result;
use crate::ingest::COLUMNS;
use crate::models::PatientRecord;

/// Write patient records to a CSV file
pub fn write_csv_file(path: &Path, records: &[PatientRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv_records(file, records)?;
    info!("Exported {} patient records to {}", records.len(), path.display());
    Ok(())
}

/// Write patient records to any CSV sink
pub fn write_csv_records<W: Write>(sink: W, records: &[PatientRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record([
            record.name.as_str(),
            &record.age.to_string(),
            record.gender.as_str(),
            record.area.as_str(),
            record.visit_date.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
