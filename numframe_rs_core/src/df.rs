//! # df
//!
//! a numeric DataFrame module: one row-major `f64` store, named columns,
//! and copy-on-transform structural operations

pub const ROW_PREFIX: &str = "row_";

pub fn row_name(index: usize) -> String {
    format!("{ROW_PREFIX}{index}")
}

pub mod frame;
#[cfg(feature = "stats")]
pub mod stats;
pub mod vector;

pub use frame::DataFrame;
pub use vector::{ColumnVector, DataVector, RowVector};
