//! In-memory catalog index.
//!
//! The index owns every normalized [`CatalogRow`] for the session and
//! answers exact-match lookups by (family, product, upholstery type,
//! upholstery color[, base color]). Upholstery type and color are stored
//! in sentinel form (blank reads as `N/A`) so absence matches absence
//! without special cases at every call site.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use m2o_model::{CatalogRow, RawTable, columns, is_absent, parse_optional, sentinel};

use crate::display_name::compose_display_name;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct CatalogIndex {
    rows: Vec<CatalogRow>,
    /// Catalog header order, kept for the export fallback schema.
    source_columns: Vec<String>,
    by_family: BTreeMap<String, Vec<usize>>,
    by_item: BTreeMap<String, usize>,
}

impl CatalogIndex {
    /// Build the index from a normalized raw table.
    ///
    /// Fails when required columns are missing, reporting the full list of
    /// missing names. A missing `Product Display Name` is tolerated as
    /// long as it can be derived from product type and model.
    pub fn load(table: &RawTable) -> Result<Self> {
        let mut missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|name| !table.has_column(name))
            .map(|name| (*name).to_string())
            .collect();
        let has_display = table.has_column(columns::PRODUCT_DISPLAY_NAME);
        if !has_display
            && !(table.has_column(columns::PRODUCT_TYPE)
                && table.has_column(columns::PRODUCT_MODEL))
        {
            missing.push(format!(
                "{} (or {} + {})",
                columns::PRODUCT_DISPLAY_NAME,
                columns::PRODUCT_TYPE,
                columns::PRODUCT_MODEL
            ));
        }
        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns(missing));
        }
        for name in columns::EXPECTED {
            if !table.has_column(name) {
                warn!(column = *name, "catalog lacks expected column; display degrades");
            }
        }

        let mut rows = Vec::with_capacity(table.rows.len());
        let mut by_family: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_item: BTreeMap<String, usize> = BTreeMap::new();
        for raw_row in &table.rows {
            let cell = |name: &str| table.cell(raw_row, name).unwrap_or("");
            let family = cell(columns::PRODUCT_FAMILY).trim().to_string();
            let product = if has_display && !is_absent(cell(columns::PRODUCT_DISPLAY_NAME)) {
                cell(columns::PRODUCT_DISPLAY_NAME).trim().to_string()
            } else {
                compose_display_name(
                    cell(columns::PRODUCT_TYPE),
                    cell(columns::PRODUCT_MODEL),
                    cell(columns::SOFA_DIRECTION),
                )
            };
            let item_number = cell(columns::ITEM_NO).trim().to_string();

            let fields: BTreeMap<String, String> = table
                .headers
                .iter()
                .cloned()
                .zip(raw_row.iter().cloned())
                .collect();
            let index = rows.len();
            rows.push(CatalogRow::new(
                family.clone(),
                product,
                sentinel(cell(columns::UPHOLSTERY_TYPE)).to_string(),
                sentinel(cell(columns::UPHOLSTERY_COLOR)).to_string(),
                parse_optional(cell(columns::BASE_COLOR)),
                item_number.clone(),
                parse_optional(cell(columns::ARTICLE_NO)),
                parse_optional(cell(columns::IMAGE_URL_SWATCH)),
                fields,
            ));
            by_family.entry(family).or_default().push(index);
            if !item_number.is_empty() {
                // First occurrence wins when item numbers repeat.
                by_item.entry(item_number).or_insert(index);
            }
        }

        debug!(rows = rows.len(), families = by_family.len(), "catalog indexed");
        Ok(Self {
            rows,
            source_columns: table.headers.clone(),
            by_family,
            by_item,
        })
    }

    /// Catalog column names in source order.
    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    /// Families present in the catalog, alphabetical, excluding blank/NA.
    pub fn families_available(&self) -> Vec<String> {
        self.by_family
            .keys()
            .filter(|family| !is_absent(family))
            .cloned()
            .collect()
    }

    pub fn rows_for(&self, family: &str) -> impl Iterator<Item = &CatalogRow> {
        self.by_family
            .get(family.trim())
            .into_iter()
            .flatten()
            .map(|&idx| &self.rows[idx])
    }

    /// Distinct product display names in a family, alphabetical.
    pub fn products_in(&self, family: &str) -> Vec<String> {
        let set: BTreeSet<String> = self
            .rows_for(family)
            .filter(|row| !row.product.is_empty())
            .map(|row| row.product.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Distinct upholstery types in a family, alphabetical.
    pub fn types_in(&self, family: &str) -> Vec<String> {
        let set: BTreeSet<String> = self
            .rows_for(family)
            .map(|row| row.upholstery_type.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Distinct (color, swatch) pairs for a type within a family, sorted
    /// by color. The first swatch seen for a color wins.
    pub fn colors_for(&self, family: &str, upholstery_type: &str) -> Vec<(String, Option<String>)> {
        let wanted = sentinel(upholstery_type);
        let mut colors: BTreeMap<String, Option<String>> = BTreeMap::new();
        for row in self.rows_for(family) {
            if row.upholstery_type != wanted {
                continue;
            }
            colors
                .entry(row.upholstery_color.clone())
                .or_insert_with(|| row.swatch.clone());
        }
        colors.into_iter().collect()
    }

    /// Rows matching all four generic fields exactly. Type and color
    /// queries in blank form compare as `N/A`.
    pub fn matches(
        &self,
        family: &str,
        product: &str,
        upholstery_type: &str,
        upholstery_color: &str,
    ) -> Vec<&CatalogRow> {
        let wanted_type = sentinel(upholstery_type);
        let wanted_color = sentinel(upholstery_color);
        self.rows_for(family)
            .filter(|row| {
                row.product == product.trim()
                    && row.upholstery_type == wanted_type
                    && row.upholstery_color == wanted_color
            })
            .collect()
    }

    /// Rows matching the generic fields plus a specific base color.
    /// `None` matches rows without a base.
    pub fn matches_with_base(
        &self,
        family: &str,
        product: &str,
        upholstery_type: &str,
        upholstery_color: &str,
        base: Option<&str>,
    ) -> Vec<&CatalogRow> {
        let wanted_base = sentinel(base.unwrap_or(""));
        self.matches(family, product, upholstery_type, upholstery_color)
            .into_iter()
            .filter(|row| row.base_sentinel() == wanted_base)
            .collect()
    }

    /// Distinct real base colors among rows matching the generic fields,
    /// sorted. The `N/A` sentinel never counts as a base.
    pub fn bases_for(
        &self,
        family: &str,
        product: &str,
        upholstery_type: &str,
        upholstery_color: &str,
    ) -> Vec<String> {
        let set: BTreeSet<String> = self
            .matches(family, product, upholstery_type, upholstery_color)
            .into_iter()
            .filter_map(|row| row.base_color.clone())
            .collect();
        set.into_iter().collect()
    }

    /// First catalog row carrying the item number, if any.
    pub fn row_by_item(&self, item_number: &str) -> Option<&CatalogRow> {
        self.by_item
            .get(item_number.trim())
            .map(|&idx| &self.rows[idx])
    }
}
