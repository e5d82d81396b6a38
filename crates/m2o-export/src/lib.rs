//! Export formatting and writers.
//!
//! [`format_rows`] maps resolved items onto the template schema (with the
//! unconditional price-column exclusion); `write_xlsx` / `write_csv` turn
//! the result into files.

#![deny(unsafe_code)]

mod csv_out;
mod error;
mod formatter;
mod xlsx;

pub use csv_out::write_csv;
pub use error::{ExportError, Result};
pub use formatter::{ExportTable, format_rows, is_price_column};
pub use xlsx::{XlsxOptions, write_xlsx};
