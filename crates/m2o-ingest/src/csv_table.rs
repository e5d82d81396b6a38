//! CSV loading into [`RawTable`].
//!
//! Catalog exports come out of spreadsheet tooling, so headers arrive with
//! stray padding, doubled spaces and the occasional BOM. Everything is
//! normalized here once; downstream code can rely on clean strings.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use m2o_model::RawTable;

use crate::error::{IngestError, Result};

/// Collapse internal whitespace, trim, and strip a leading BOM.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a normalized table. Missing cells coerce to empty
/// strings rather than failing the row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table_from(file, path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded csv table"
    );
    Ok(table)
}

fn read_table_from<R: Read>(reader: R, path: &Path) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row: Vec<String> = record.iter().map(normalize_cell).collect();
        // Flexible parsing may yield short rows; pad so every row has one
        // cell per header.
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn headers_are_normalized() {
        let file = write_temp("\u{feff} Item  No ,Product Family\nIT-1,Rest\n");
        let table = read_csv_table(file.path()).expect("read table");
        assert_eq!(table.headers, vec!["Item No", "Product Family"]);
        assert_eq!(table.rows, vec![vec!["IT-1".to_string(), "Rest".to_string()]]);
    }

    #[test]
    fn short_rows_are_padded() {
        let file = write_temp("A,B,C\n1,2\n");
        let table = read_csv_table(file.path()).expect("read table");
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_temp("");
        let error = read_csv_table(file.path()).expect_err("empty table");
        assert!(matches!(error, IngestError::EmptyTable { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = read_csv_table(Path::new("/nonexistent/raw-data.csv"))
            .expect_err("missing file");
        assert!(error.to_string().contains("raw-data.csv"));
    }
}
