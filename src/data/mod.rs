//! Data loading and chart pipeline
//!
//! One submodule per stage:
//! - `csv_parser`: delimited file to [`RawTable`](crate::types::RawTable)
//! - `normalizer`: abbreviated cells to the canonical integer table
//! - `selection`: slice rows and year columns by the user's choice
//! - `reshape`: wide to tidy (long) records and back
//! - `chart_engine`: tidy records to a [`ChartSpec`]
//!
//! ## Error Handling
//!
//! Loading returns `DataResult<T>` which uses the `DataError` type.
//! Everything after loading is infallible: unknown countries are skipped,
//! out-of-range years are clamped and missing values become gaps.

mod chart_engine;
mod csv_parser;
mod error;
mod normalizer;
mod reshape;
mod selection;

pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use normalizer::*;
pub use reshape::*;
pub use selection::*;
