//! Resolution of logical selections into concrete catalog rows.
//!
//! `resolve` is a pure function of the index and the store, re-run in
//! full after every mutation. The returned sequence is the canonical
//! "current selections" view; nothing is patched incrementally, so stale
//! entries are impossible.

use std::collections::BTreeSet;

use tracing::debug;

use m2o_catalog::CatalogIndex;
use m2o_model::{ResolvedItem, describe};

use crate::store::SelectionStore;

/// Resolve every selection in the store to exportable items.
///
/// Single/no-base selections emit one item from their direct resolution;
/// multi-base selections emit one item per chosen base, in chosen order,
/// silently skipping bases that no longer match a row. The result is
/// de-duplicated by (item number, base-or-sentinel) in first-seen order,
/// and items without an item number are dropped outright.
pub fn resolve(index: &CatalogIndex, store: &SelectionStore) -> Vec<ResolvedItem> {
    let mut items = Vec::new();
    for (key, selection) in store.selections() {
        if !selection.requires_base_choice {
            let Some(direct) = &selection.direct else {
                continue;
            };
            items.push(ResolvedItem {
                description: describe(key, direct.resolved_base.as_deref()),
                item_number: direct.item_number.clone(),
                article_number: direct.article_number.clone(),
                source_key: key.clone(),
                base_color: direct.resolved_base.clone(),
            });
            continue;
        }
        for base in store.chosen_bases(key) {
            let rows = index.matches_with_base(
                &key.family,
                &key.product,
                &key.upholstery_type,
                &key.upholstery_color,
                Some(base),
            );
            let Some(row) = rows.first() else {
                // Data inconsistency between selection time and now;
                // skip, never fail.
                debug!(%key, %base, "chosen base no longer matches a catalog row");
                continue;
            };
            items.push(ResolvedItem {
                description: describe(key, Some(base)),
                item_number: row.item_number.clone(),
                article_number: row.article_number.clone(),
                source_key: key.clone(),
                base_color: Some(base.clone()),
            });
        }
    }

    let mut seen = BTreeSet::new();
    let before = items.len();
    items.retain(|item| !item.item_number.trim().is_empty() && seen.insert(item.dedup_key()));
    if items.len() != before {
        debug!(
            dropped = before - items.len(),
            "dropped duplicate or unexportable resolved items"
        );
    }
    items
}
