//! Raw tabular input, the shape shared between ingest and indexing.

/// A header row plus string rows, already normalized by the ingest layer
/// (trimmed cells, whitespace-collapsed headers, no BOM).
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of a header, compared case-insensitively after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, named column); empty string when the column exists but
    /// the row is short. `None` only when the column is absent entirely.
    pub fn cell<'a>(&'a self, row: &'a [String], name: &str) -> Option<&'a str> {
        let idx = self.column_index(name)?;
        Some(row.get(idx).map_or("", String::as_str))
    }
}
