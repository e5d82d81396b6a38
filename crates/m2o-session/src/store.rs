//! Mutable selection state for one session.
//!
//! The store holds the user's generic selections and, for multi-base
//! selections, the chosen base colors. All mutations are idempotent with
//! respect to repeated application of the same logical input, and all
//! state is scoped to exactly one active family at a time.

use std::collections::BTreeMap;

use tracing::debug;

use m2o_catalog::CatalogIndex;
use m2o_model::{DirectResolution, GenericSelection, ResolvedItem, SelectionKey};

use crate::error::{Result, SessionError};

/// What a toggle actually did. Only `Added` and `Removed` count as
/// changes for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The toggle restated the current state (re-check or re-uncheck).
    Unchanged,
    /// Checked a cell with no catalog rows behind it; signalled to the
    /// user as a transient notice, never an error.
    NotFound,
}

impl ToggleOutcome {
    pub fn changed(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

/// Per-session selection state. Never shared across sessions; callers
/// pass it explicitly wherever it is needed.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    active_family: Option<String>,
    selections: BTreeMap<SelectionKey, GenericSelection>,
    chosen_bases: BTreeMap<SelectionKey, Vec<String>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_family(&self) -> Option<&str> {
        self.active_family.as_deref()
    }

    /// Make `family` the active family. Switching away from a previous
    /// family drops every selection and chosen base belonging to it;
    /// selections never accumulate across families.
    pub fn set_active_family(&mut self, family: &str) {
        let family = family.trim();
        if self.active_family.as_deref() == Some(family) {
            return;
        }
        if self.active_family.is_some() {
            debug!(
                previous = self.active_family.as_deref(),
                next = family,
                cleared = self.selections.len(),
                "family changed; clearing selections"
            );
        }
        self.selections.clear();
        self.chosen_bases.clear();
        self.active_family = Some(family.to_string());
    }

    pub fn selections(&self) -> impl Iterator<Item = (&SelectionKey, &GenericSelection)> {
        self.selections.iter()
    }

    pub fn selection(&self, key: &SelectionKey) -> Option<&GenericSelection> {
        self.selections.get(key)
    }

    pub fn chosen_bases(&self, key: &SelectionKey) -> &[String] {
        self.chosen_bases.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Check or uncheck one matrix cell.
    ///
    /// Checking a cell with no matching catalog rows is a no-op that
    /// reports [`ToggleOutcome::NotFound`]. Otherwise checking creates
    /// (or refreshes) the selection, deciding at this point whether a
    /// base choice is required; unchecking removes the selection together
    /// with its chosen bases.
    pub fn toggle_cell(
        &mut self,
        index: &CatalogIndex,
        family: &str,
        product: &str,
        upholstery_type: &str,
        upholstery_color: &str,
        checked: bool,
    ) -> ToggleOutcome {
        self.set_active_family(family);
        let key = SelectionKey::new(family, product, upholstery_type, upholstery_color);
        if !checked {
            let removed = self.selections.remove(&key).is_some();
            self.chosen_bases.remove(&key);
            return if removed {
                ToggleOutcome::Removed
            } else {
                ToggleOutcome::Unchanged
            };
        }

        let matches = index.matches(family, product, upholstery_type, upholstery_color);
        if matches.is_empty() {
            debug!(%key, "toggle on cell without catalog rows");
            return ToggleOutcome::NotFound;
        }
        let bases = index.bases_for(family, product, upholstery_type, upholstery_color);
        let selection = if bases.len() > 1 {
            GenericSelection::with_bases(key.clone(), bases)
        } else {
            let resolved_base = bases.into_iter().next();
            // With a single base, resolve through it so the item number
            // belongs to that variant; otherwise any match works.
            let row = match resolved_base.as_deref() {
                Some(base) => index
                    .matches_with_base(
                        family,
                        product,
                        upholstery_type,
                        upholstery_color,
                        Some(base),
                    )
                    .into_iter()
                    .next()
                    .unwrap_or(matches[0]),
                None => matches[0],
            };
            GenericSelection::direct(
                key.clone(),
                DirectResolution {
                    item_number: row.item_number.clone(),
                    article_number: row.article_number.clone(),
                    resolved_base,
                },
            )
        };
        let existed = self.selections.insert(key, selection).is_some();
        if existed {
            ToggleOutcome::Unchanged
        } else {
            ToggleOutcome::Added
        }
    }

    /// Bulk-toggle one column against a list of products, skipping
    /// products with no matching rows. Returns the number of selections
    /// actually added or removed, excluding no-ops.
    pub fn toggle_column(
        &mut self,
        index: &CatalogIndex,
        family: &str,
        upholstery_type: &str,
        upholstery_color: &str,
        products: &[String],
        checked: bool,
    ) -> usize {
        let mut changed = 0;
        for product in products {
            let outcome = self.toggle_cell(
                index,
                family,
                product,
                upholstery_type,
                upholstery_color,
                checked,
            );
            if outcome.changed() {
                changed += 1;
            }
        }
        debug!(
            upholstery_type,
            upholstery_color, checked, changed, "column toggle applied"
        );
        changed
    }

    /// Replace the chosen bases of a multi-base selection wholesale.
    ///
    /// Bases the selection does not offer are dropped; an empty resulting
    /// set prunes the whole selection ("no base chosen means not
    /// selected").
    pub fn set_chosen_bases(&mut self, key: &SelectionKey, bases: Vec<String>) -> Result<()> {
        let selection = self
            .selections
            .get(key)
            .ok_or_else(|| SessionError::UnknownSelection(key.to_string()))?;
        if !selection.requires_base_choice {
            return Err(SessionError::BaseChoiceNotApplicable(key.to_string()));
        }
        let mut accepted = Vec::new();
        for base in bases {
            if selection.offers_base(&base) && !accepted.contains(&base) {
                accepted.push(base);
            }
        }
        if accepted.is_empty() {
            self.selections.remove(key);
            self.chosen_bases.remove(key);
        } else {
            self.chosen_bases.insert(key.clone(), accepted);
        }
        Ok(())
    }

    /// Add or remove one base color across every selection in `family`
    /// that offers it. Selections whose chosen set empties are pruned.
    /// Returns the number of selections whose chosen set changed.
    pub fn toggle_family_base(&mut self, family: &str, base: &str, checked: bool) -> usize {
        let keys: Vec<SelectionKey> = self
            .selections
            .iter()
            .filter(|(key, selection)| key.family == family.trim() && selection.offers_base(base))
            .map(|(key, _)| key.clone())
            .collect();
        let mut changed = 0;
        for key in keys {
            if checked {
                let chosen = self.chosen_bases.entry(key.clone()).or_default();
                if !chosen.iter().any(|b| b == base) {
                    chosen.push(base.to_string());
                    changed += 1;
                }
            } else if let Some(chosen) = self.chosen_bases.get_mut(&key) {
                let before = chosen.len();
                chosen.retain(|b| b != base);
                if chosen.len() != before {
                    changed += 1;
                    if chosen.is_empty() {
                        // Last base gone: the selection itself goes away.
                        self.chosen_bases.remove(&key);
                        self.selections.remove(&key);
                    }
                }
            }
        }
        changed
    }

    /// Remove the state behind one resolved item.
    ///
    /// A multi-base item removes only its base (pruning the selection
    /// when the set empties); a single/no-base item removes the whole
    /// selection.
    pub fn remove_resolved(&mut self, item: &ResolvedItem) {
        let key = &item.source_key;
        let multi = self
            .selections
            .get(key)
            .is_some_and(|s| s.requires_base_choice);
        if multi {
            if let Some(base) = &item.base_color {
                if let Some(chosen) = self.chosen_bases.get_mut(key) {
                    chosen.retain(|b| b != base);
                    if chosen.is_empty() {
                        self.chosen_bases.remove(key);
                        self.selections.remove(key);
                    }
                }
                return;
            }
        }
        self.selections.remove(key);
        self.chosen_bases.remove(key);
    }
}
