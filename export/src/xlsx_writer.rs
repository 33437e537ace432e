//! FILENAME: export/src/xlsx_writer.rs

use std::path::Path;

use report_engine::ExportRow;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};

use crate::{ExportColumns, ExportError};

/// Writes the linearized report to an XLSX file with a bold header row.
///
/// Rows are written in the order given; a measure absent from a row's
/// aggregates is written as 0 so every column is fully populated.
pub fn save_xlsx(
    rows: &[ExportRow],
    columns: &ExportColumns,
    path: &Path,
) -> Result<(), ExportError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name("Report")?;

    let header_format = Format::new().set_bold();
    for (col, title) in columns.header_row().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let sheet_row = (i + 1) as u32;
        worksheet.write_string(sheet_row, 0, &row.label)?;

        for (j, measure) in columns.measures.iter().enumerate() {
            let value = row.aggregates.get(measure).copied().unwrap_or(0.0);
            worksheet.write_number(sheet_row, (j + 1) as u16, value)?;
        }
    }

    // Widen the label column so indented leaf labels stay readable.
    worksheet.set_column_width(0, 30.0)?;

    xlsx.save(path)?;
    Ok(())
}
