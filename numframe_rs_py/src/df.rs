//! A DataFrame binding from [`numframe_core::DataFrame`] to Python using [`pyo3`].
//!
//! # Design
//!
//! [`DataFrameF64`] owns a core [`DataFrame`] and exchanges data with Python through
//! numpy arrays, which are copied on the way in and on the way out. Every structural
//! operation returns a new [`DataFrameF64`], so a Python caller never observes a
//! partially transformed frame.
//!
//! Rows handed to Python callbacks (`select`, `compute_column`) are plain `dict`s
//! mapping column names to values.

use numframe_core::{df::stats::StatsError, DataFrame, FrameError};
use pyo3::{
    exceptions::{PyIndexError, PyKeyError, PyValueError},
    prelude::*,
};

mod meta;
mod ops;
mod stats;

#[pyclass]
pub struct DataFrameF64 {
    pub inner: DataFrame,
}

impl From<DataFrame> for DataFrameF64 {
    fn from(inner: DataFrame) -> Self {
        Self { inner }
    }
}

pub(crate) fn frame_err(e: FrameError) -> PyErr {
    match e {
        FrameError::RowOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        FrameError::UnknownColumn(_) | FrameError::UnknownEntry(_) => {
            PyKeyError::new_err(e.to_string())
        }
        _ => PyValueError::new_err(e.to_string()),
    }
}

pub(crate) fn stats_err(e: StatsError) -> PyErr {
    match e {
        StatsError::Frame(e) => frame_err(e),
        _ => PyValueError::new_err(e.to_string()),
    }
}
