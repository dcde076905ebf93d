use super::{frame_err, meta::PyVector, DataFrameF64};
use numpy::ToPyArray;
use pyo3::prelude::*;

#[pymethods]
impl DataFrameF64 {
    fn expand(&self, additional_rows: usize, new_columns: Vec<String>) -> PyResult<Self> {
        self.inner
            .expand(additional_rows, &new_columns)
            .map(Into::into)
            .map_err(frame_err)
    }

    fn project(&self, retain_columns: Vec<String>) -> Self {
        self.inner.project(&retain_columns).into()
    }

    /// `predicate` receives each row as a `dict` and is evaluated for truthiness
    fn select(&self, predicate: &Bound<'_, PyAny>) -> PyResult<Self> {
        let mut mask = Vec::with_capacity(self.inner.row_count());
        for row in self.inner.get_rows() {
            mask.push(predicate.call1((row.as_map(),))?.is_truthy()?);
        }
        let mut mask = mask.into_iter();
        Ok(self
            .inner
            .select(|_| mask.next().unwrap_or(false))
            .into())
    }

    /// `func` receives each row as a `dict` and returns the new column's value
    fn compute_column(&self, name: &str, func: &Bound<'_, PyAny>) -> PyResult<Self> {
        let mut computed = Vec::with_capacity(self.inner.row_count());
        for row in self.inner.get_rows() {
            computed.push(func.call1((row.as_map(),))?.extract::<f64>()?);
        }
        let mut computed = computed.into_iter();
        self.inner
            .compute_column(name, |_| computed.next().unwrap_or(f64::NAN))
            .map(Into::into)
            .map_err(frame_err)
    }

    fn summarize<'py>(
        &self,
        py: Python<'py>,
        name: &str,
        reducer: &Bound<'py, PyAny>,
    ) -> PyResult<PyVector<'py>> {
        let mut error = None;
        let summary = self.inner.summarize(name, |acc, x| {
            if error.is_some() {
                return f64::NAN;
            }
            match reducer.call1((acc, x)).and_then(|r| r.extract::<f64>()) {
                Ok(value) => value,
                Err(e) => {
                    error = Some(e);
                    f64::NAN
                }
            }
        });
        if let Some(e) = error {
            return Err(e);
        }
        Ok((
            summary.name().to_string(),
            summary.entry_names().to_vec(),
            summary.values().to_pyarray_bound(py),
        ))
    }
}
