//! # df/stats
//!
//! a statistics facade over [`DataFrame`] columns.
//!
//! every method projects the named column(s) into a flat `f64` view and hands it
//! to the numerical engines: `ndarray` for moments and dot products, `statrs` for
//! the Student's t distribution.

use super::DataFrame;
use crate::error::FrameError;
use log::{debug, trace};
use ndarray::ArrayView1;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("column `{column}` needs at least {needed} values, got {got}")]
    NotEnoughData {
        column: String,
        needed: usize,
        got: usize,
    },
    #[error("t distribution: {0}")]
    Distribution(String),
}

pub type Result<T, E = StatsError> = core::result::Result<T, E>;

fn sample_mean(x: ArrayView1<f64>) -> f64 {
    x.sum() / x.len() as f64
}

/// sum of squared deviations from the mean
fn sum_squares(x: ArrayView1<f64>, mean: f64) -> f64 {
    let centered = &x - mean;
    centered.dot(&centered)
}

fn sample_variance(x: ArrayView1<f64>) -> f64 {
    sum_squares(x, sample_mean(x)) / (x.len() - 1) as f64
}

/// two-sided p-value of `t` under a Student's t distribution with `freedom` degrees
///
/// `NaN` in either input (constant samples, `NaN` cells) yields a `NaN` p-value.
fn two_sided_p_value(t: f64, freedom: f64) -> Result<f64> {
    if t.is_nan() || freedom.is_nan() {
        return Ok(f64::NAN);
    }
    let dist = StudentsT::new(0., 1., freedom)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(2. * dist.cdf(-t.abs()))
}

fn corr(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let a = &a - sample_mean(a);
    let b = &b - sample_mean(b);
    let cov = a.dot(&b);
    let var1 = a.dot(&a);
    let var2 = b.dot(&b);
    cov / (var1.sqrt() * var2.sqrt())
}

/// a descriptive summary of one column
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub n: usize,
    pub sum: f64,
    pub mean: f64,
    /// sample variance (`n - 1` denominator), `0.0` for a single value
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// bias-corrected sample skewness, `None` below 3 values or with zero variance
    pub skewness: Option<f64>,
    /// bias-corrected excess kurtosis, `None` below 4 values or with zero variance
    pub kurtosis: Option<f64>,
    sorted: Vec<f64>,
}

impl Description {
    fn new(x: ArrayView1<f64>) -> Self {
        let n = x.len();
        let nf = n as f64;
        let sum = x.sum();
        let mean = if n == 0 { f64::NAN } else { sum / nf };
        let (sum2, sum3, sum4) = x.iter().fold((0., 0., 0.), |(s2, s3, s4), &v| {
            let d = v - mean;
            let d2 = d * d;
            (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
        });
        let variance = match n {
            0 => f64::NAN,
            1 => 0.,
            _ => sum2 / (nf - 1.),
        };
        let skewness = if n < 3 || variance == 0. {
            None
        } else {
            let m2 = sum2 / nf;
            let m3 = sum3 / nf;
            Some((nf * (nf - 1.)).sqrt() / (nf - 2.) * m3 / m2.powf(1.5))
        };
        let kurtosis = if n < 4 || variance == 0. {
            None
        } else {
            let a = nf * (nf + 1.) / ((nf - 1.) * (nf - 2.) * (nf - 3.));
            let b = 3. * (nf - 1.) * (nf - 1.) / ((nf - 2.) * (nf - 3.));
            Some(a * sum4 / (variance * variance) - b)
        };
        let mut sorted = x.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            n,
            sum,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min: sorted.first().copied().unwrap_or(f64::NAN),
            max: sorted.last().copied().unwrap_or(f64::NAN),
            skewness,
            kurtosis,
            sorted,
        }
    }

    /// the `p`-th percentile, `p` in `(0, 100]`
    ///
    /// uses the position `p * (n + 1) / 100`, clamped to the first and last values
    /// and linearly interpolated in between. `None` for an empty column or `p` out of range.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        if !(p > 0. && p <= 100.) || self.sorted.is_empty() {
            return None;
        }
        let n = self.sorted.len();
        let pos = p * (n + 1) as f64 / 100.;
        if pos < 1. {
            return self.sorted.first().copied();
        }
        if pos >= n as f64 {
            return self.sorted.last().copied();
        }
        let lower_pos = pos.floor();
        let lower = self.sorted[lower_pos as usize - 1];
        let upper = self.sorted[lower_pos as usize];
        Some(lower + (pos - lower_pos) * (upper - lower))
    }

    pub fn median(&self) -> Option<f64> {
        self.percentile(50.)
    }
}

/// the statistics view of a [`DataFrame`], see [`DataFrame::statistics`]
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    frame: &'a DataFrame,
}

impl DataFrame {
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics { frame: self }
    }
}

impl<'a> Statistics<'a> {
    fn sample(&self, column: &str, needed: usize) -> Result<ArrayView1<'a, f64>> {
        let x = self.frame.column_view(column)?;
        if x.len() < needed {
            return Err(StatsError::NotEnoughData {
                column: column.to_string(),
                needed,
                got: x.len(),
            });
        }
        Ok(x)
    }

    /// one-sample, two-sided t-test of `column` against the mean `mu`, returns the p-value
    pub fn t_test(&self, column: &str, mu: f64) -> Result<f64> {
        let x = self.sample(column, 2)?;
        let n = x.len() as f64;
        let t = (sample_mean(x) - mu) / (sample_variance(x) / n).sqrt();
        trace!("one-sample t-test on `{column}`: t = {t}");
        two_sided_p_value(t, n - 1.)
    }

    /// two-sample, two-sided t-test without assuming equal variances (Welch), returns the p-value
    pub fn two_sample_t_test(&self, column1: &str, column2: &str) -> Result<f64> {
        let a = self.sample(column1, 2)?;
        let b = self.sample(column2, 2)?;
        let (n1, n2) = (a.len() as f64, b.len() as f64);
        let se1 = sample_variance(a) / n1;
        let se2 = sample_variance(b) / n2;
        let t = (sample_mean(a) - sample_mean(b)) / (se1 + se2).sqrt();
        let freedom = (se1 + se2).powi(2) / (se1 * se1 / (n1 - 1.) + se2 * se2 / (n2 - 1.));
        trace!("welch t-test on `{column1}` / `{column2}`: t = {t}, df = {freedom}");
        two_sided_p_value(t, freedom)
    }

    /// `NaN` when either column is constant
    pub fn pearsons_correlation(&self, column1: &str, column2: &str) -> Result<f64> {
        let a = self.sample(column1, 2)?;
        let b = self.sample(column2, 2)?;
        Ok(corr(a, b))
    }

    pub fn describe(&self, column: &str) -> Result<Description> {
        Ok(Description::new(self.sample(column, 0)?))
    }

    /// linear model estimation is not implemented, this always returns `None`
    pub fn estimate_linear_model<S: AsRef<str>>(
        &self,
        dependent: &str,
        independent: &[S],
    ) -> Option<HashMap<String, f64>> {
        debug!(
            "linear model of `{dependent}` on {} regressors was requested but is not implemented",
            independent.len()
        );
        None
    }
}
