use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The raw table lacks columns the index cannot be built without.
    /// Fatal and user-visible; the list names every missing column.
    #[error("catalog is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
