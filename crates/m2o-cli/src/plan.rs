//! Selection plans.
//!
//! The presentation layer is out of scope for this binary, so a whole
//! interactive session is described as a plan file: the family to work
//! in followed by the selection operations in order.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A scripted session: one family plus ordered selection operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionPlan {
    /// The active family; every action applies within it.
    pub family: String,
    #[serde(default)]
    pub actions: Vec<PlanAction>,
}

/// One selection operation, mirroring the store's command surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanAction {
    /// Check or uncheck one product/type/color cell.
    ToggleCell {
        product: String,
        upholstery_type: String,
        upholstery_color: String,
        #[serde(default = "default_checked")]
        checked: bool,
    },
    /// Check or uncheck a whole (type, color) column across the family's
    /// products.
    ToggleColumn {
        upholstery_type: String,
        upholstery_color: String,
        #[serde(default = "default_checked")]
        checked: bool,
    },
    /// Replace the chosen bases of one multi-base selection.
    SetBases {
        product: String,
        upholstery_type: String,
        upholstery_color: String,
        bases: Vec<String>,
    },
    /// Add or remove one base color across every selection offering it.
    FamilyBase {
        base: String,
        #[serde(default = "default_checked")]
        checked: bool,
    },
}

fn default_checked() -> bool {
    true
}

/// Load a plan from a JSON file.
pub fn load_plan(path: &Path) -> anyhow::Result<SelectionPlan> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse plan {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_parses_with_defaults() {
        let json = r#"{
            "family": "Rest",
            "actions": [
                {"op": "toggle_cell", "product": "Sofa", "upholstery_type": "Fabric", "upholstery_color": "Blue"},
                {"op": "toggle_column", "upholstery_type": "Fabric", "upholstery_color": "Grey", "checked": false},
                {"op": "set_bases", "product": "Sofa", "upholstery_type": "Fabric", "upholstery_color": "Grey", "bases": ["Oak"]},
                {"op": "family_base", "base": "Walnut"}
            ]
        }"#;
        let plan: SelectionPlan = serde_json::from_str(json).expect("plan parses");
        assert_eq!(plan.family, "Rest");
        assert_eq!(plan.actions.len(), 4);
        assert!(matches!(
            plan.actions[0],
            PlanAction::ToggleCell { checked: true, .. }
        ));
        assert!(matches!(
            plan.actions[1],
            PlanAction::ToggleColumn { checked: false, .. }
        ));
        assert!(matches!(
            plan.actions[3],
            PlanAction::FamilyBase { checked: true, .. }
        ));
    }

    #[test]
    fn plan_round_trips() {
        let plan = SelectionPlan {
            family: "Rest".to_string(),
            actions: vec![PlanAction::FamilyBase {
                base: "Oak".to_string(),
                checked: false,
            }],
        };
        let json = serde_json::to_string(&plan).expect("serialize plan");
        let round: SelectionPlan = serde_json::from_str(&json).expect("deserialize plan");
        assert_eq!(round.family, plan.family);
        assert_eq!(round.actions.len(), 1);
    }
}
