//! Excel ingestion
//!
//! Reads the first worksheet of an Excel workbook. The workbook format is
//! detected from the file itself, so both zip-based `.xlsx` and legacy
//! binary `.xls` files open. Date-typed cells are rendered `YYYY-MM-DD`;
//! raw numeric cells (including serial-number dates from files that store
//! dates untyped) are carried through as numeric strings, which the date
//! normalizer interprets with the spreadsheet serial epoch.

use std::io;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use log::info;

use super::ColumnMap;
use crate::error::{ClinicInsightError, Result};
use crate::models::PatientRecord;

/// Read patient records from the first worksheet of an Excel workbook
pub fn read_excel_file(path: &Path) -> Result<Vec<PatientRecord>> {
    info!("Reading patient records from {}", path.display());
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        ClinicInsightError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Workbook has no worksheets: {}", path.display()),
        ))
    })??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let columns = ColumnMap::from_headers(headers.iter().map(String::as_str));

    let mut records = Vec::new();
    for row in rows {
        records.push(columns.record_from(|index| row.get(index).map(cell_to_string)));
    }

    info!("Ingested {} patient records", records.len());
    Ok(records)
}

/// Render one worksheet cell as the raw string a record field stores
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.date().format("%Y-%m-%d").to_string(),
            None => dt.as_f64().to_string(),
        },
    }
}
