use super::DataFrame;
use crate::error::{FrameError, Result};
use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use std::collections::HashMap;

pub(crate) fn index_columns(columns: &[String]) -> HashMap<String, usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect()
}

pub(crate) fn build_lookup(columns: &[String]) -> Result<HashMap<String, usize>> {
    if let Some(name) = columns.iter().duplicates().next() {
        return Err(FrameError::DuplicateColumn(name.clone()));
    }
    Ok(index_columns(columns))
}

impl DataFrame {
    pub fn new<I, S>(columns: I, values: Array2<f64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if values.ncols() != columns.len() {
            return Err(FrameError::ColumnCountMismatch {
                expected: columns.len(),
                got: values.ncols(),
            });
        }
        let lookup = build_lookup(&columns)?;
        Ok(Self {
            columns,
            lookup,
            values,
        })
    }

    /// builds a frame from row-major data, every row must hold one value per column
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<f64>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let num_columns = columns.len();
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != num_columns)
        {
            return Err(FrameError::ShapeMismatch {
                row,
                expected: num_columns,
                got: values.len(),
            });
        }
        let values = Array2::from_shape_fn((rows.len(), num_columns), |(i, j)| rows[i][j]);
        Self::new(columns, values)
    }

    pub fn row_count(&self) -> usize {
        self.values.nrows()
    }
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }
    pub fn values(&self) -> ArrayView2<f64> {
        self.values.view()
    }

    pub(crate) fn column_position(&self, column: &str) -> Result<usize> {
        self.lookup
            .get(column)
            .copied()
            .ok_or_else(|| FrameError::UnknownColumn(column.to_string()))
    }
    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count() {
            return Err(FrameError::RowOutOfRange {
                index: row,
                rows: self.row_count(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ndarray::array;

    pub(crate) fn get_test_df() -> DataFrame {
        DataFrame::from_rows(
            ["A", "B", "C"],
            vec![vec![1., 2., 3.], vec![4., 5., 6.], vec![7., 8., 9.]],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows() {
        let df = get_test_df();
        assert_eq!(df.shape(), (3, 3));
        assert_eq!(df.row_count(), 3);
        assert_eq!(df.column_count(), 3);
        assert_eq!(df.column_names(), &["A", "B", "C"]);
        assert_eq!(
            df.values(),
            array![[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]
        );
    }

    #[test]
    fn test_new_from_array() {
        let df = DataFrame::new(["x", "y"], array![[1., 2.]]).unwrap();
        assert_eq!(df.shape(), (1, 2));
        let err = DataFrame::new(["x"], array![[1., 2.]]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ColumnCountMismatch {
                expected: 1,
                got: 2
            }
        );
        let df = DataFrame::new(["x", "y"], Array2::zeros((0, 2))).unwrap();
        assert_eq!(df.shape(), (0, 2));
        let err = DataFrame::new(["x", "y"], Array2::zeros((0, 3))).unwrap_err();
        assert_eq!(
            err,
            FrameError::ColumnCountMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_empty_frames() {
        let df = DataFrame::from_rows(["A", "B"], vec![]).unwrap();
        assert_eq!(df.shape(), (0, 2));
        let df = DataFrame::from_rows(Vec::<String>::new(), vec![vec![], vec![]]).unwrap();
        assert_eq!(df.shape(), (2, 0));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err =
            DataFrame::from_rows(["A", "B"], vec![vec![1., 2.], vec![3.]]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ShapeMismatch {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = DataFrame::from_rows(["A", "B", "A"], vec![vec![1., 2., 3.]]).unwrap_err();
        assert_eq!(err, FrameError::DuplicateColumn("A".to_string()));
    }
}
