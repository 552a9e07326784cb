//! Tabular ingestion of patient records
//!
//! Readers for CSV and Excel sources. Both map the column headers
//! `Name, Age, Gender, Area, Visit Date` to record fields by name; a
//! missing column or cell defaults to an empty string (zero for age)
//! rather than failing, and headers are not otherwise validated. Every
//! ingested row receives a fresh synthetic id.

pub mod csv;
pub mod excel;

pub use self::csv::{read_csv_file, read_csv_records};
pub use self::excel::read_excel_file;

use log::warn;

use crate::models::PatientRecord;

/// The five ingestion columns, in export order
pub const COLUMNS: [&str; 5] = ["Name", "Age", "Gender", "Area", "Visit Date"];

/// Header-name to column-index mapping for one tabular source
pub(crate) struct ColumnMap {
    name: Option<usize>,
    age: Option<usize>,
    gender: Option<usize>,
    area: Option<usize>,
    visit_date: Option<usize>,
}

impl ColumnMap {
    /// Build the mapping from a header row, warning once per missing column
    pub(crate) fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self {
            name: None,
            age: None,
            gender: None,
            area: None,
            visit_date: None,
        };

        for (index, header) in headers.into_iter().enumerate() {
            let slot = match header.trim() {
                "Name" => &mut map.name,
                "Age" => &mut map.age,
                "Gender" => &mut map.gender,
                "Area" => &mut map.area,
                "Visit Date" => &mut map.visit_date,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(index);
            }
        }

        for (column, slot) in COLUMNS.iter().zip([
            &map.name,
            &map.age,
            &map.gender,
            &map.area,
            &map.visit_date,
        ]) {
            if slot.is_none() {
                warn!("{column} column not found, defaulting the field for all rows");
            }
        }

        map
    }

    /// Build a record from one data row, defaulting missing cells
    pub(crate) fn record_from(&self, cell: impl Fn(usize) -> Option<String>) -> PatientRecord {
        let get = |slot: Option<usize>| slot.and_then(&cell).unwrap_or_default();
        PatientRecord::new(
            get(self.name),
            parse_age(&get(self.age)),
            get(self.gender),
            get(self.area),
            get(self.visit_date),
        )
    }
}

/// Parse an age cell, defaulting to zero on anything non-numeric
fn parse_age(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if let Ok(age) = trimmed.parse::<i32>() {
        return age;
    }
    // Spreadsheet numeric cells may render as floats ("42.0")
    trimmed.parse::<f64>().map(|f| f.trunc() as i32).unwrap_or(0)
}
