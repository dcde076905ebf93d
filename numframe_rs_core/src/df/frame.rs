use ndarray::Array2;
use std::collections::HashMap;

mod indexing;
mod meta;
mod ops;

/// a 2-D `f64` table addressed by (row index, column name).
///
/// `values` is the only store. `lookup` maps every column name to its position
/// in `columns` and is rebuilt whenever a new frame is constructed, so column
/// reads are views over `values` and cannot drift from row reads.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    pub(crate) columns: Vec<String>,
    pub(crate) lookup: HashMap<String, usize>,
    pub(crate) values: Array2<f64>,
}
