//! Output template loading.
//!
//! The export schema is defined by the first row of a template file; only
//! the column names matter, any data rows are ignored.

use std::path::Path;

use tracing::debug;

use crate::csv_table::read_csv_table;
use crate::error::Result;

/// Load the ordered column names from a template file.
pub fn load_template_columns(path: &Path) -> Result<Vec<String>> {
    let table = read_csv_table(path)?;
    let columns: Vec<String> = table
        .headers
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect();
    debug!(
        path = %path.display(),
        columns = columns.len(),
        "loaded template columns"
    );
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn first_row_defines_columns() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"Item No,Product,Wholesale Price (EUR)\nignored,data,1\n")
            .expect("write template");
        let columns = load_template_columns(file.path()).expect("load columns");
        assert_eq!(columns, vec!["Item No", "Product", "Wholesale Price (EUR)"]);
    }

    #[test]
    fn blank_trailing_headers_are_dropped() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"Item No,Product,,\n").expect("write template");
        let columns = load_template_columns(file.path()).expect("load columns");
        assert_eq!(columns, vec!["Item No", "Product"]);
    }
}
