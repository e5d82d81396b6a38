//! Selection matrix derivation.
//!
//! The matrix is the product × (upholstery type, color) grid driving the
//! selection UI. It is derived fresh from the index whenever the active
//! family changes; base colors are deliberately not resolved here, that
//! happens at selection time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::CatalogIndex;

/// One (upholstery type, upholstery color) column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixColumn {
    pub upholstery_type: String,
    pub upholstery_color: String,
    pub swatch: Option<String>,
}

/// Ordered products × ordered columns with a presence bitmap.
#[derive(Debug, Clone)]
pub struct Matrix {
    pub family: String,
    pub products: Vec<String>,
    pub columns: Vec<MatrixColumn>,
    /// Row-major: `present[product_idx * columns.len() + column_idx]`.
    present: Vec<bool>,
}

impl Matrix {
    /// Derive the grid for a family. Columns are grouped by type in
    /// sorted-type order with colors ascending within each type; every
    /// column has at least one matching row somewhere in the family.
    pub fn build(index: &CatalogIndex, family: &str) -> Self {
        let products = index.products_in(family);
        let mut columns = Vec::new();
        for upholstery_type in index.types_in(family) {
            for (color, swatch) in index.colors_for(family, &upholstery_type) {
                columns.push(MatrixColumn {
                    upholstery_type: upholstery_type.clone(),
                    upholstery_color: color,
                    swatch,
                });
            }
        }

        let mut present = vec![false; products.len() * columns.len()];
        for (row_idx, product) in products.iter().enumerate() {
            for (col_idx, column) in columns.iter().enumerate() {
                let hit = !index
                    .matches(
                        family,
                        product,
                        &column.upholstery_type,
                        &column.upholstery_color,
                    )
                    .is_empty();
                present[row_idx * columns.len() + col_idx] = hit;
            }
        }
        debug!(
            family,
            products = products.len(),
            columns = columns.len(),
            "built selection matrix"
        );
        Self {
            family: family.trim().to_string(),
            products,
            columns,
            present,
        }
    }

    /// True when this cell has at least one catalog row behind it.
    pub fn is_present(&self, product_idx: usize, column_idx: usize) -> bool {
        self.present
            .get(product_idx * self.columns.len() + column_idx)
            .copied()
            .unwrap_or(false)
    }

    /// An empty matrix is an informational state (nothing to select),
    /// not an error.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() || self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m2o_model::RawTable;

    fn index() -> CatalogIndex {
        let headers = [
            "Product Family",
            "Product Display Name",
            "Upholstery Type",
            "Upholstery Color",
            "Base Color",
            "Item No",
        ];
        let rows: Vec<Vec<String>> = [
            ["Rest", "Sofa", "Fabric", "Blue", "N/A", "IT-1"],
            ["Rest", "Sofa", "Leather", "Black", "N/A", "IT-2"],
            ["Rest", "Chair", "Fabric", "Grey", "N/A", "IT-3"],
        ]
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
        let table = RawTable {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows,
        };
        CatalogIndex::load(&table).expect("index loads")
    }

    #[test]
    fn columns_group_by_type_then_color() {
        let matrix = Matrix::build(&index(), "Rest");
        let pairs: Vec<(&str, &str)> = matrix
            .columns
            .iter()
            .map(|c| (c.upholstery_type.as_str(), c.upholstery_color.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Fabric", "Blue"), ("Fabric", "Grey"), ("Leather", "Black")]
        );
        assert_eq!(matrix.products, vec!["Chair", "Sofa"]);
    }

    #[test]
    fn presence_follows_catalog_rows() {
        let matrix = Matrix::build(&index(), "Rest");
        // Chair: only Fabric/Grey.
        assert!(!matrix.is_present(0, 0));
        assert!(matrix.is_present(0, 1));
        assert!(!matrix.is_present(0, 2));
        // Sofa: Fabric/Blue and Leather/Black.
        assert!(matrix.is_present(1, 0));
        assert!(!matrix.is_present(1, 1));
        assert!(matrix.is_present(1, 2));
    }

    #[test]
    fn unknown_family_yields_empty_matrix() {
        let matrix = Matrix::build(&index(), "Nowhere");
        assert!(matrix.is_empty());
        assert!(!matrix.is_present(0, 0));
    }
}
