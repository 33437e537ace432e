//! FILENAME: export/src/lib.rs
//! Report Export Module
//!
//! Writes a linearized pivot report (the sequence of labeled, aggregated
//! rows produced by `report-engine`) to spreadsheet-like files. The sink
//! receives an explicit list of measure columns to include; anything not
//! listed is left out of the file.

mod csv_writer;
mod error;
mod xlsx_writer;

pub use csv_writer::save_csv;
pub use error::ExportError;
pub use xlsx_writer::save_xlsx;

use serde::{Deserialize, Serialize};

/// Header text of the leading group-label column.
pub const GROUP_COLUMN_HEADER: &str = "Group";

/// The column layout of an exported report: the group-label column is
/// always first, followed by one column per listed measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportColumns {
    /// Measure field names, in output order.
    pub measures: Vec<String>,
}

impl ExportColumns {
    pub fn new(measures: Vec<String>) -> Self {
        ExportColumns { measures }
    }

    /// Full header row, label column included.
    pub fn header_row(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.measures.len() + 1);
        header.push(GROUP_COLUMN_HEADER.to_string());
        header.extend(self.measures.iter().cloned());
        header
    }
}
