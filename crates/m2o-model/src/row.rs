//! Catalog variant records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel the source data uses for "no value" in attribute columns.
pub const NOT_APPLICABLE: &str = "N/A";

/// True when a cell carries no usable value: blank or the `N/A` sentinel
/// in any casing.
pub fn is_absent(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_APPLICABLE)
}

/// Parse an attribute cell into an explicit optional value. Blank and
/// `N/A` both mean "not applicable".
pub fn parse_optional(value: &str) -> Option<String> {
    if is_absent(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}

/// Comparison form of an attribute cell: absence reads as the literal
/// `N/A` sentinel so absent matches absent consistently.
pub fn sentinel(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_APPLICABLE
    } else {
        trimmed
    }
}

/// One variant record from the raw catalog, normalized and immutable for
/// the session lifetime. `fields` keeps every source column (original
/// header spelling) so the export formatter can copy arbitrary columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    pub family: String,
    /// Display name, taken from the catalog or derived from
    /// product type / model.
    pub product: String,
    pub upholstery_type: String,
    pub upholstery_color: String,
    /// `None` when the variant has no base (the source `N/A` sentinel).
    pub base_color: Option<String>,
    /// Required for export eligibility; may be empty in dirty data, in
    /// which case the row is never exported.
    pub item_number: String,
    pub article_number: Option<String>,
    pub swatch: Option<String>,
    fields: BTreeMap<String, String>,
}

impl CatalogRow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        family: String,
        product: String,
        upholstery_type: String,
        upholstery_color: String,
        base_color: Option<String>,
        item_number: String,
        article_number: Option<String>,
        swatch: Option<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            family,
            product,
            upholstery_type,
            upholstery_color,
            base_color,
            item_number,
            article_number,
            swatch,
            fields,
        }
    }

    /// Source field by column name, case-insensitive. Empty cells were
    /// kept as empty strings by ingest, so `None` means the column does
    /// not exist in the source at all.
    pub fn field(&self, name: &str) -> Option<&str> {
        let wanted = name.trim();
        self.fields
            .iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(wanted))
            .map(|(_, v)| v.as_str())
    }

    /// Base color in comparison form (`N/A` when absent).
    pub fn base_sentinel(&self) -> &str {
        self.base_color.as_deref().unwrap_or(NOT_APPLICABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_detection() {
        assert!(is_absent(""));
        assert!(is_absent("  "));
        assert!(is_absent("N/A"));
        assert!(is_absent("n/a"));
        assert!(!is_absent("Oak"));
    }

    #[test]
    fn optional_parsing_trims() {
        assert_eq!(parse_optional(" Oak "), Some("Oak".to_string()));
        assert_eq!(parse_optional("N/A"), None);
        assert_eq!(parse_optional(""), None);
    }

    #[test]
    fn sentinel_substitutes_blank_only() {
        assert_eq!(sentinel(""), "N/A");
        assert_eq!(sentinel("  "), "N/A");
        assert_eq!(sentinel(" Fabric "), "Fabric");
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let mut fields = BTreeMap::new();
        fields.insert("Item Name".to_string(), "Rest Sofa".to_string());
        let row = CatalogRow::new(
            "Rest".to_string(),
            "Sofa".to_string(),
            "Fabric".to_string(),
            "Blue".to_string(),
            None,
            "IT-1".to_string(),
            None,
            None,
            fields,
        );
        assert_eq!(row.field("item name"), Some("Rest Sofa"));
        assert_eq!(row.field("Color"), None);
        assert_eq!(row.base_sentinel(), "N/A");
    }
}
