use super::{stats_err, DataFrameF64};
use pyo3::{prelude::*, types::PyDict};
use std::collections::HashMap;

#[pymethods]
impl DataFrameF64 {
    fn t_test(&self, column: &str, mu: f64) -> PyResult<f64> {
        self.inner.statistics().t_test(column, mu).map_err(stats_err)
    }

    fn two_sample_t_test(&self, column1: &str, column2: &str) -> PyResult<f64> {
        self.inner
            .statistics()
            .two_sample_t_test(column1, column2)
            .map_err(stats_err)
    }

    fn pearsons_correlation(&self, column1: &str, column2: &str) -> PyResult<f64> {
        self.inner
            .statistics()
            .pearsons_correlation(column1, column2)
            .map_err(stats_err)
    }

    fn describe<'py>(&self, py: Python<'py>, column: &str) -> PyResult<Bound<'py, PyDict>> {
        let description = self.inner.statistics().describe(column).map_err(stats_err)?;
        let dict = PyDict::new_bound(py);
        dict.set_item("n", description.n)?;
        dict.set_item("sum", description.sum)?;
        dict.set_item("mean", description.mean)?;
        dict.set_item("variance", description.variance)?;
        dict.set_item("std_dev", description.std_dev)?;
        dict.set_item("min", description.min)?;
        dict.set_item("max", description.max)?;
        dict.set_item("skewness", description.skewness)?;
        dict.set_item("kurtosis", description.kurtosis)?;
        dict.set_item("median", description.median())?;
        Ok(dict)
    }

    /// always `None`, linear models are not estimated
    fn estimate_linear_model(
        &self,
        dependent: &str,
        independent: Vec<String>,
    ) -> Option<HashMap<String, f64>> {
        self.inner
            .statistics()
            .estimate_linear_model(dependent, &independent)
    }
}
