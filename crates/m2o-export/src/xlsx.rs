//! Single-sheet XLSX output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::Result;
use crate::formatter::ExportTable;

/// Write options for the workbook output.
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    /// Worksheet name; Excel caps sheet names at 31 characters.
    pub sheet_name: String,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Masterdata".to_string(),
        }
    }
}

/// Write the export table to one worksheet: bold header row, string data
/// rows in table order, columns autofitted.
pub fn write_xlsx(table: &ExportTable, path: &Path, options: &XlsxOptions) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, name.as_str(), &header_format)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell.as_str())?;
        }
    }
    worksheet.autofit();
    workbook.save(path)?;
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.columns.len(),
        "wrote xlsx export"
    );
    Ok(())
}
