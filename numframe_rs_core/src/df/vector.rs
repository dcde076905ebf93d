//! # df/vector
//!
//! detached 1-D snapshots taken from a [`DataFrame`](super::DataFrame).
//!
//! the two roles are kept apart by type:
//! - [`RowVector`] is keyed by column name, and is looked up by exact name equality
//! - [`ColumnVector`] is keyed by row position, its entry names (`row_0`, `row_1`, ...)
//! are synthesized and never consulted during lookup
//!
//! [`DataVector`] wraps either of them for callers that handle both.

use super::{row_name, ROW_PREFIX};
use crate::error::{FrameError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RowVector {
    name: String,
    index: Option<usize>,
    entry_names: Vec<String>,
    values: Vec<f64>,
}

impl RowVector {
    pub(crate) fn for_row(index: usize, entry_names: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            name: row_name(index),
            index: Some(index),
            entry_names,
            values,
        }
    }

    pub(crate) fn summary(name: &str, entry_names: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            index: None,
            entry_names,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// the row position inside the source frame, `None` for column-wise summaries
    pub fn index(&self) -> Option<usize> {
        self.index
    }
    pub fn entry_names(&self) -> &[String] {
        &self.entry_names
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// looks up `entry` by exact match against the entry names, the first match wins
    pub fn get_value(&self, entry: &str) -> Result<f64> {
        self.entry_names
            .iter()
            .position(|name| name == entry)
            .map(|i| self.values[i])
            .ok_or_else(|| FrameError::UnknownEntry(entry.to_string()))
    }

    /// later duplicates of an entry name overwrite earlier ones
    pub fn as_map(&self) -> HashMap<String, f64> {
        self.entry_names
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnVector {
    name: String,
    values: Vec<f64>,
}

impl ColumnVector {
    pub(crate) fn new(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn entry_names(&self) -> Vec<String> {
        (0..self.values.len()).map(row_name).collect()
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Result<f64> {
        self.values
            .get(row)
            .copied()
            .ok_or(FrameError::RowOutOfRange {
                index: row,
                rows: self.values.len(),
            })
    }

    /// drops the first four characters of `entry` and reads the rest as a row number
    ///
    /// only the numeric suffix matters, so `row_3` and `abc_3` address the same value.
    pub fn get_value(&self, entry: &str) -> Result<f64> {
        let malformed = || FrameError::MalformedEntry(entry.to_string());
        let (offset, _) = entry
            .char_indices()
            .nth(ROW_PREFIX.len())
            .ok_or_else(malformed)?;
        let row = entry[offset..].parse::<usize>().map_err(|_| malformed())?;
        self.get(row)
    }

    pub fn as_map(&self) -> HashMap<String, f64> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| (row_name(i), value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataVector {
    Row(RowVector),
    Column(ColumnVector),
}

impl DataVector {
    pub fn is_row(&self) -> bool {
        matches!(self, DataVector::Row(_))
    }
    pub fn name(&self) -> &str {
        match self {
            DataVector::Row(row) => row.name(),
            DataVector::Column(column) => column.name(),
        }
    }
    pub fn entry_names(&self) -> Vec<String> {
        match self {
            DataVector::Row(row) => row.entry_names().to_vec(),
            DataVector::Column(column) => column.entry_names(),
        }
    }
    pub fn values(&self) -> &[f64] {
        match self {
            DataVector::Row(row) => row.values(),
            DataVector::Column(column) => column.values(),
        }
    }
    pub fn len(&self) -> usize {
        self.values().len()
    }
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
    pub fn get_value(&self, entry: &str) -> Result<f64> {
        match self {
            DataVector::Row(row) => row.get_value(entry),
            DataVector::Column(column) => column.get_value(entry),
        }
    }
    pub fn as_map(&self) -> HashMap<String, f64> {
        match self {
            DataVector::Row(row) => row.as_map(),
            DataVector::Column(column) => column.as_map(),
        }
    }
}

impl From<RowVector> for DataVector {
    fn from(row: RowVector) -> Self {
        DataVector::Row(row)
    }
}
impl From<ColumnVector> for DataVector {
    fn from(column: ColumnVector) -> Self {
        DataVector::Column(column)
    }
}
