//! Catalog indexing and matrix derivation.
//!
//! [`CatalogIndex`] normalizes and indexes the raw catalog for exact-match
//! lookups; [`Matrix`] derives the product × attribute grid the selection
//! flow runs on.

#![deny(unsafe_code)]

mod display_name;
mod error;
mod index;
mod matrix;

pub use display_name::compose_display_name;
pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use matrix::{Matrix, MatrixColumn};
