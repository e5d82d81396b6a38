//! Selection identity.
//!
//! Selections are keyed by a typed value object so two selections collide
//! exactly when all four identifying fields are equal. The flattened
//! string form exists for display and plan files only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a generic selection: one cell of the family matrix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub family: String,
    pub product: String,
    pub upholstery_type: String,
    pub upholstery_color: String,
}

impl SelectionKey {
    pub fn new(
        family: impl Into<String>,
        product: impl Into<String>,
        upholstery_type: impl Into<String>,
        upholstery_color: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            product: product.into(),
            upholstery_type: upholstery_type.into(),
            upholstery_color: upholstery_color.into(),
        }
    }

    /// Flattened string form of the key, stable across runs.
    ///
    /// Known limitation inherited from the source system: normalization
    /// collapses `__` runs and strips parentheses, so two keys that differ
    /// only in those substrings flatten identically. State never depends
    /// on this form; it is for humans and serialized plans.
    pub fn normalized(&self) -> String {
        normalize_key(&format!(
            "{}_{}_{}_{}",
            self.family, self.product, self.upholstery_type, self.upholstery_color
        ))
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.family, self.product, self.upholstery_type, self.upholstery_color
        )
    }
}

/// Flatten a raw string into key form: spaces and `/` become `_`,
/// parentheses are stripped, `__` runs collapse (single pass).
pub fn normalize_key(raw: &str) -> String {
    raw.replace(' ', "_")
        .replace('/', "_")
        .replace(['(', ')'], "")
        .replace("__", "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_matches_source_rules() {
        assert_eq!(normalize_key("Rest Sofa (2-seater)"), "Rest_Sofa_2-seater");
        assert_eq!(normalize_key("Wool/Nylon Blend"), "Wool_Nylon_Blend");
        assert_eq!(normalize_key("a  b"), "a_b");
    }

    #[test]
    fn normalized_key_is_deterministic() {
        let key = SelectionKey::new("Rest", "Sofa (Left)", "Fabric", "Blue/Grey");
        assert_eq!(key.normalized(), "Rest_Sofa_Left_Fabric_Blue_Grey");
        assert_eq!(key.normalized(), key.normalized());
    }

    #[test]
    fn keys_order_by_fields() {
        let a = SelectionKey::new("Rest", "Chair", "Fabric", "Blue");
        let b = SelectionKey::new("Rest", "Sofa", "Fabric", "Blue");
        assert!(a < b);
    }
}
