//! Shared data model for the made-to-order variant configurator.
//!
//! Everything here is plain data: catalog rows, selection identities and
//! state shapes, resolved export rows. Behavior lives in the catalog,
//! session and export crates.

pub mod columns;
pub mod key;
pub mod resolved;
pub mod row;
pub mod selection;
pub mod table;

pub use key::{SelectionKey, normalize_key};
pub use resolved::{ResolvedItem, describe};
pub use row::{CatalogRow, NOT_APPLICABLE, is_absent, parse_optional, sentinel};
pub use selection::{DirectResolution, GenericSelection};
pub use table::RawTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_item_serializes() {
        let key = SelectionKey::new("Rest", "Sofa", "Fabric", "Blue");
        let item = ResolvedItem {
            description: describe(&key, Some("Oak")),
            item_number: "IT-9".to_string(),
            article_number: Some("ART-9".to_string()),
            source_key: key,
            base_color: Some("Oak".to_string()),
        };
        let json = serde_json::to_string(&item).expect("serialize item");
        let round: ResolvedItem = serde_json::from_str(&json).expect("deserialize item");
        assert_eq!(round, item);
    }
}
