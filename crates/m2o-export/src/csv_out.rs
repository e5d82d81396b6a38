//! CSV output, for pipelines that do not want a workbook.

use std::path::Path;

use tracing::info;

use crate::error::{ExportError, Result};
use crate::formatter::ExportTable;

pub fn write_csv(table: &ExportTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let to_csv_error = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(&table.columns).map_err(to_csv_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(to_csv_error)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        "wrote csv export"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let table = ExportTable {
            columns: vec!["Item No".to_string(), "Product".to_string()],
            rows: vec![vec!["IT-1".to_string(), "Rest Sofa".to_string()]],
        };
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        write_csv(&table, &path).expect("write csv");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "Item No,Product\nIT-1,Rest Sofa\n");
    }
}
