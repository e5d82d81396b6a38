//! Currency/market pre-filtering.
//!
//! Raw catalogs sometimes repeat every variant once per sales market. The
//! configurator works on one market at a time (or all of them), so rows
//! for other markets are dropped before indexing.

use tracing::{debug, warn};

use m2o_model::RawTable;

/// Market value that disables filtering.
pub const ALL_MARKETS: &str = "ALL";

/// Header spellings known to carry the market/currency value, tried in
/// order before falling back to a case-insensitive scan.
const CANDIDATES: &[&str] = &[
    "Currency",
    "Market",
    "Currency/Market",
    "Market/Currency",
    "Price Currency",
    "Sales Currency",
];

/// Locate the market column, if the catalog has one.
pub fn find_market_column(table: &RawTable) -> Option<usize> {
    for candidate in CANDIDATES {
        if let Some(idx) = table
            .headers
            .iter()
            .position(|h| h == candidate)
        {
            return Some(idx);
        }
    }
    table.headers.iter().position(|h| {
        CANDIDATES
            .iter()
            .any(|candidate| h.eq_ignore_ascii_case(candidate))
    })
}

/// Keep only rows whose market column equals `market` (exact, trimmed).
///
/// `ALL` (any casing) keeps everything. A specific market with no
/// detectable market column is a degraded state: warn and keep everything
/// rather than fail the load.
pub fn filter_market(table: RawTable, market: &str) -> RawTable {
    if market.trim().eq_ignore_ascii_case(ALL_MARKETS) {
        return table;
    }
    let Some(idx) = find_market_column(&table) else {
        warn!(
            market,
            "no currency/market column found in catalog; keeping all rows"
        );
        return table;
    };
    let wanted = market.trim();
    let before = table.rows.len();
    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .filter(|row| row.get(idx).is_some_and(|cell| cell.trim() == wanted))
        .collect();
    debug!(
        market,
        kept = rows.len(),
        dropped = before - rows.len(),
        "filtered catalog by market"
    );
    RawTable {
        headers: table.headers,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_market() -> RawTable {
        RawTable {
            headers: vec!["Item No".to_string(), "Currency".to_string()],
            rows: vec![
                vec!["IT-1".to_string(), "EURO".to_string()],
                vec!["IT-2".to_string(), "DKK".to_string()],
                vec!["IT-3".to_string(), "EURO".to_string()],
            ],
        }
    }

    #[test]
    fn all_keeps_every_row() {
        let table = filter_market(table_with_market(), "all");
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn specific_market_filters_rows() {
        let table = filter_market(table_with_market(), "EURO");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "IT-1");
        assert_eq!(table.rows[1][0], "IT-3");
    }

    #[test]
    fn missing_market_column_keeps_everything() {
        let table = RawTable {
            headers: vec!["Item No".to_string()],
            rows: vec![vec!["IT-1".to_string()]],
        };
        let filtered = filter_market(table, "EURO");
        assert_eq!(filtered.rows.len(), 1);
    }

    #[test]
    fn detection_falls_back_to_case_insensitive() {
        let table = RawTable {
            headers: vec!["item no".to_string(), "MARKET".to_string()],
            rows: vec![],
        };
        assert_eq!(find_market_column(&table), Some(1));
    }
}
