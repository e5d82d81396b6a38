//! User selection state types.

use serde::{Deserialize, Serialize};

use crate::key::SelectionKey;

/// Resolution captured at selection time for cells that do not need a
/// base choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectResolution {
    pub item_number: String,
    pub article_number: Option<String>,
    /// The single base when exactly one exists; `None` when the variant
    /// has no base at all.
    pub resolved_base: Option<String>,
}

/// A logical selection of (family, product, upholstery type, upholstery
/// color), created on check and destroyed on uncheck.
///
/// Exactly one of the two shapes holds:
/// - `requires_base_choice == false`: `direct` is populated,
///   `available_bases` is empty and the key never appears in the
///   chosen-bases map;
/// - `requires_base_choice == true`: `available_bases` lists the distinct
///   bases and the selection contributes resolved items only through
///   chosen bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericSelection {
    pub key: SelectionKey,
    pub requires_base_choice: bool,
    /// Distinct bases among matching rows, sorted; populated only when a
    /// base choice is required.
    pub available_bases: Vec<String>,
    pub direct: Option<DirectResolution>,
}

impl GenericSelection {
    pub fn direct(key: SelectionKey, resolution: DirectResolution) -> Self {
        Self {
            key,
            requires_base_choice: false,
            available_bases: Vec::new(),
            direct: Some(resolution),
        }
    }

    pub fn with_bases(key: SelectionKey, available_bases: Vec<String>) -> Self {
        Self {
            key,
            requires_base_choice: true,
            available_bases,
            direct: None,
        }
    }

    pub fn offers_base(&self, base: &str) -> bool {
        self.available_bases.iter().any(|b| b == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_mutually_exclusive() {
        let key = SelectionKey::new("Rest", "Sofa", "Fabric", "Blue");
        let single = GenericSelection::direct(
            key.clone(),
            DirectResolution {
                item_number: "IT-1".to_string(),
                article_number: None,
                resolved_base: None,
            },
        );
        assert!(!single.requires_base_choice);
        assert!(single.available_bases.is_empty());

        let multi =
            GenericSelection::with_bases(key, vec!["Oak".to_string(), "Walnut".to_string()]);
        assert!(multi.requires_base_choice);
        assert!(multi.direct.is_none());
        assert!(multi.offers_base("Oak"));
        assert!(!multi.offers_base("Ash"));
    }
}
