//! FILENAME: export/src/csv_writer.rs

use std::path::Path;

use report_engine::ExportRow;

use crate::{ExportColumns, ExportError};

/// Writes the linearized report as delimited text, same column contract
/// as the XLSX writer: group label first, then one column per measure.
pub fn save_csv(
    rows: &[ExportRow],
    columns: &ExportColumns,
    path: &Path,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(columns.header_row())?;

    for row in rows {
        let mut record = Vec::with_capacity(columns.measures.len() + 1);
        record.push(row.label.clone());
        for measure in &columns.measures {
            let value = row.aggregates.get(measure).copied().unwrap_or(0.0);
            record.push(value.to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
