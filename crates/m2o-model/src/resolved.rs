//! Fully resolved, exportable selections.

use serde::{Deserialize, Serialize};

use crate::key::SelectionKey;
use crate::row::NOT_APPLICABLE;

/// One row destined for export, computed fresh on every reconciliation
/// pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// Human-readable summary, `family / product / type / color` with an
    /// optional `/ Base: {base}` suffix.
    pub description: String,
    pub item_number: String,
    pub article_number: Option<String>,
    /// The selection this item came from; drives the removal contract.
    pub source_key: SelectionKey,
    /// The specific base this item resolves, when one applies.
    pub base_color: Option<String>,
}

impl ResolvedItem {
    /// De-duplication identity across the whole resolved list: item
    /// number plus base (absence folds to the `N/A` sentinel).
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.item_number.clone(),
            self.base_color
                .clone()
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        )
    }
}

/// Build the display description for a selection, appending the base
/// suffix only when a base applies. Never emits a placeholder.
pub fn describe(key: &SelectionKey, base: Option<&str>) -> String {
    match base {
        Some(base) => format!("{key} / Base: {base}"),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_omits_missing_base() {
        let key = SelectionKey::new("Sofa", "Model X", "Fabric", "Blue");
        assert_eq!(describe(&key, None), "Sofa / Model X / Fabric / Blue");
        assert_eq!(
            describe(&key, Some("Oak")),
            "Sofa / Model X / Fabric / Blue / Base: Oak"
        );
    }

    #[test]
    fn dedup_key_folds_missing_base_to_sentinel() {
        let key = SelectionKey::new("Sofa", "Model X", "Fabric", "Blue");
        let item = ResolvedItem {
            description: describe(&key, None),
            item_number: "IT-1".to_string(),
            article_number: None,
            source_key: key,
            base_color: None,
        };
        assert_eq!(item.dedup_key(), ("IT-1".to_string(), "N/A".to_string()));
    }
}
