//! Catalog and template ingestion.
//!
//! This crate owns everything about getting raw tabular data into memory:
//! CSV parsing with header/cell normalization, the optional currency/market
//! pre-filter, and template column loading. Structural validation of the
//! catalog (required columns, display-name derivation) belongs to the
//! catalog index, not here.

#![deny(unsafe_code)]

mod csv_table;
mod error;
mod market;
mod template;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use market::{ALL_MARKETS, filter_market, find_market_column};
pub use template::load_template_columns;
