use crate::df::{frame_err, DataFrameF64};
use numframe_core::random::{DistributionError, RandomFrameGenerator};
use pyo3::{exceptions::PyValueError, prelude::*};

fn distribution_err(e: DistributionError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn generate(
    generator: Result<RandomFrameGenerator, DistributionError>,
    seed: i64,
    rows: usize,
    columns: Vec<String>,
) -> PyResult<DataFrameF64> {
    generator
        .map_err(distribution_err)?
        .generate(seed, rows, columns)
        .map(Into::into)
        .map_err(frame_err)
}

#[pyfunction]
pub fn generate_uniform(
    seed: i64,
    rows: usize,
    columns: Vec<String>,
    lower: f64,
    upper: f64,
) -> PyResult<DataFrameF64> {
    generate(RandomFrameGenerator::uniform(lower, upper), seed, rows, columns)
}

#[pyfunction]
pub fn generate_gaussian(
    seed: i64,
    rows: usize,
    columns: Vec<String>,
    mean: f64,
    std_dev: f64,
) -> PyResult<DataFrameF64> {
    generate(RandomFrameGenerator::gaussian(mean, std_dev), seed, rows, columns)
}

#[pyfunction]
pub fn generate_exponential(
    seed: i64,
    rows: usize,
    columns: Vec<String>,
    mean: f64,
) -> PyResult<DataFrameF64> {
    generate(RandomFrameGenerator::exponential(mean), seed, rows, columns)
}
