//! Mapping resolved items onto the output column template.

use tracing::{debug, warn};

use m2o_catalog::CatalogIndex;
use m2o_model::{ResolvedItem, columns};

/// The formatted output: filtered column names plus one string row per
/// exportable resolved item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Price columns never leave the system, template or not.
pub fn is_price_column(name: &str) -> bool {
    let lowered = name.trim_start().to_lowercase();
    lowered.starts_with("wholesale price") || lowered.starts_with("retail price")
}

/// Map resolved items onto the template schema.
///
/// Output columns are the template columns minus price columns; an empty
/// template falls back to the catalog's own columns (same exclusion).
/// Each item is populated from the first catalog row carrying its item
/// number; items whose number is not in the catalog anymore are skipped,
/// not emitted as blank rows.
pub fn format_rows(
    items: &[ResolvedItem],
    index: &CatalogIndex,
    template_columns: &[String],
) -> ExportTable {
    let source: &[String] = if template_columns.is_empty() {
        debug!("no template columns; falling back to catalog columns");
        index.source_columns()
    } else {
        template_columns
    };
    let export_columns: Vec<String> = source
        .iter()
        .filter(|name| !is_price_column(name))
        .cloned()
        .collect();

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let Some(source_row) = index.row_by_item(&item.item_number) else {
            warn!(
                item = %item.item_number,
                "selected item no longer in catalog; dropping from export"
            );
            continue;
        };
        let row = export_columns
            .iter()
            .map(|column| {
                if column.trim().eq_ignore_ascii_case("product") {
                    // The product column prefers the commercial item name
                    // over the (possibly derived) display name.
                    match source_row.field(columns::ITEM_NAME) {
                        Some(name) if !name.is_empty() => name.to_string(),
                        _ => source_row.product.clone(),
                    }
                } else {
                    source_row.field(column).unwrap_or("").to_string()
                }
            })
            .collect();
        rows.push(row);
    }
    ExportTable {
        columns: export_columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_columns_are_recognized() {
        assert!(is_price_column("Wholesale Price (EUR)"));
        assert!(is_price_column("  retail price DKK"));
        assert!(is_price_column("RETAIL PRICE"));
        assert!(!is_price_column("Price Currency"));
        assert!(!is_price_column("Item No"));
    }
}
