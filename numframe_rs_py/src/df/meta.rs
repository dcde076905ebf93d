use super::{frame_err, DataFrameF64};
use numframe_core::DataFrame;
use numpy::{PyArray1, PyArray2, PyReadonlyArray2, ToPyArray};
use pyo3::prelude::*;

/// `(name, entry_names, values)`, the Python view of a row or column vector
pub(crate) type PyVector<'py> = (String, Vec<String>, Bound<'py, PyArray1<f64>>);

#[pymethods]
impl DataFrameF64 {
    #[staticmethod]
    fn new(columns: Vec<String>, values: PyReadonlyArray2<f64>) -> PyResult<Self> {
        DataFrame::new(columns, values.as_array().to_owned())
            .map(Into::into)
            .map_err(frame_err)
    }

    #[getter]
    fn columns(&self) -> Vec<String> {
        self.inner.column_names().to_vec()
    }

    #[getter]
    fn values<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.values().to_pyarray_bound(py)
    }

    #[getter]
    fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    fn get_value(&self, row: usize, column: &str) -> PyResult<f64> {
        self.inner.get_value(row, column).map_err(frame_err)
    }

    fn set_value(&mut self, row: usize, column: &str, value: f64) -> PyResult<()> {
        self.inner.set_value(row, column, value).map_err(frame_err)
    }

    fn row<'py>(&self, py: Python<'py>, row: usize) -> PyResult<PyVector<'py>> {
        let row = self.inner.get_row(row).map_err(frame_err)?;
        Ok((
            row.name().to_string(),
            row.entry_names().to_vec(),
            row.values().to_pyarray_bound(py),
        ))
    }

    fn column<'py>(&self, py: Python<'py>, column: &str) -> PyResult<PyVector<'py>> {
        let column = self.inner.get_column(column).map_err(frame_err)?;
        Ok((
            column.name().to_string(),
            column.entry_names(),
            column.values().to_pyarray_bound(py),
        ))
    }
}
