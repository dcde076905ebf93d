//! # random
//!
//! fills a [`DataFrame`] with samples drawn from a probability distribution.
//!
//! a [`RandomFrameGenerator`] owns one [`RealDistribution`], reseeds it at the start
//! of every [`generate`](RandomFrameGenerator::generate) call and samples in row-major
//! order, so the same seed, parameters and shape always reproduce the same frame.

use crate::{df::DataFrame, error::Result};
use log::debug;
use ndarray::Array2;
use ndarray_rand::rand_distr::{Distribution, Exp, Normal, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {name} distribution parameters: {reason}")]
pub struct DistributionError {
    pub name: &'static str,
    pub reason: String,
}

impl DistributionError {
    fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

/// a reseedable stream of `f64` samples
pub trait RealDistribution {
    /// restarts the sample stream from `seed`
    fn reseed(&mut self, seed: i64);
    fn sample(&mut self) -> f64;
}

pub struct SeededDistribution<D: Distribution<f64>> {
    distribution: D,
    rng: StdRng,
}

impl<D: Distribution<f64>> SeededDistribution<D> {
    /// the stream is seeded from system entropy until [`RealDistribution::reseed`] is called
    pub fn new(distribution: D) -> Self {
        Self {
            distribution,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<D: Distribution<f64>> RealDistribution for SeededDistribution<D> {
    fn reseed(&mut self, seed: i64) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

pub struct RandomFrameGenerator {
    distribution: Box<dyn RealDistribution>,
}

impl RandomFrameGenerator {
    pub fn new(distribution: Box<dyn RealDistribution>) -> Self {
        Self { distribution }
    }

    /// uniform on `[lower, upper)`
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !(lower < upper && (upper - lower).is_finite()) {
            return Err(DistributionError::new(
                "uniform",
                format!("expected finite bounds with lower < upper, got [{lower}, {upper})"),
            ));
        }
        Ok(Self::new(Box::new(SeededDistribution::new(Uniform::new(
            lower, upper,
        )))))
    }

    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !(std_dev > 0.) {
            return Err(DistributionError::new(
                "gaussian",
                format!("standard deviation must be positive, got {std_dev}"),
            ));
        }
        let normal =
            Normal::new(mean, std_dev).map_err(|e| DistributionError::new("gaussian", e.to_string()))?;
        Ok(Self::new(Box::new(SeededDistribution::new(normal))))
    }

    pub fn exponential(mean: f64) -> Result<Self, DistributionError> {
        if !(mean > 0. && mean.is_finite()) {
            return Err(DistributionError::new(
                "exponential",
                format!("mean must be positive and finite, got {mean}"),
            ));
        }
        let exp =
            Exp::new(1. / mean).map_err(|e| DistributionError::new("exponential", e.to_string()))?;
        Ok(Self::new(Box::new(SeededDistribution::new(exp))))
    }

    /// reseeds the distribution with `seed` and draws a `row_count × columns.len()` frame
    pub fn generate<I, S>(&mut self, seed: i64, row_count: usize, columns: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.distribution.reseed(seed);
        let values = Array2::from_shape_simple_fn((row_count, columns.len()), || {
            self.distribution.sample()
        });
        debug!(
            "generated a {:?} frame with seed {seed}",
            values.dim()
        );
        DataFrame::new(columns, values)
    }
}
