use super::{
    meta::{build_lookup, index_columns},
    DataFrame,
};
use crate::{df::RowVector, error::Result};
use log::debug;
use ndarray::{s, Array2, Axis};

impl DataFrame {
    /// returns a frame with `additional_rows` more rows and `new_columns` appended,
    /// every new cell is `0.0`
    ///
    /// a name in `new_columns` that already exists (in the frame or earlier in
    /// `new_columns`) is rejected with [`FrameError::DuplicateColumn`](crate::error::FrameError).
    pub fn expand<S: AsRef<str>>(&self, additional_rows: usize, new_columns: &[S]) -> Result<Self> {
        let mut columns = self.columns.clone();
        columns.extend(new_columns.iter().map(|name| name.as_ref().to_string()));
        let lookup = build_lookup(&columns)?;
        let (num_rows, num_columns) = self.shape();
        let mut values = Array2::zeros((num_rows + additional_rows, columns.len()));
        values
            .slice_mut(s![..num_rows, ..num_columns])
            .assign(&self.values);
        debug!(
            "expanded frame from {:?} to {:?}",
            (num_rows, num_columns),
            values.dim()
        );
        Ok(Self {
            columns,
            lookup,
            values,
        })
    }

    /// keeps the columns named in `retain_columns`, in the order they have in this frame
    ///
    /// names that are not columns of this frame are ignored.
    pub fn project<S: AsRef<str>>(&self, retain_columns: &[S]) -> Self {
        let positions: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| retain_columns.iter().any(|r| r.as_ref() == name.as_str()))
            .map(|(j, _)| j)
            .collect();
        let columns: Vec<String> = positions.iter().map(|&j| self.columns[j].clone()).collect();
        let values = Array2::from_shape_fn((self.row_count(), positions.len()), |(i, j)| {
            self.values[[i, positions[j]]]
        });
        debug!("projected {} columns onto {:?}", self.column_count(), columns);
        Self {
            lookup: index_columns(&columns),
            columns,
            values,
        }
    }

    /// keeps the rows for which `predicate` holds, `predicate` sees every row once, in order
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&RowVector) -> bool,
    {
        let kept: Vec<usize> = self
            .get_rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| predicate(row))
            .map(|(i, _)| i)
            .collect();
        let values = Array2::from_shape_fn((kept.len(), self.column_count()), |(i, j)| {
            self.values[[kept[i], j]]
        });
        debug!("selected {} of {} rows", kept.len(), self.row_count());
        Self {
            columns: self.columns.clone(),
            lookup: self.lookup.clone(),
            values,
        }
    }

    /// appends a column `name` holding `f(row)` for every row of this frame
    pub fn compute_column<F>(&self, name: &str, mut f: F) -> Result<Self>
    where
        F: FnMut(&RowVector) -> f64,
    {
        let mut expanded = self.expand(0, &[name])?;
        for (i, row) in self.get_rows().iter().enumerate() {
            expanded.set_value(i, name, f(row))?;
        }
        Ok(expanded)
    }

    /// folds every column with `reducer`, starting from `0.0` and walking the rows in order
    pub fn summarize<F>(&self, name: &str, mut reducer: F) -> RowVector
    where
        F: FnMut(f64, f64) -> f64,
    {
        let values = self
            .values
            .axis_iter(Axis(1))
            .map(|column| column.iter().fold(0., |acc, &x| reducer(acc, x)))
            .collect();
        RowVector::summary(name, self.columns.clone(), values)
    }
}
