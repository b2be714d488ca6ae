//! Descriptive statistics over a paired series
//!
//! One accumulation pass produces the means, population variances, and
//! covariance of the A/B samples, plus the second moments about the origin
//! that origin-anchored regression fits require.

use crate::error::{Error, Result};
use crate::series::PairedSeries;
use serde::{Deserialize, Serialize};

/// Summary statistics of a non-empty [`PairedSeries`].
///
/// Variances and the covariance use the population convention (divide by
/// `n`, not `n - 1`); every regression formula downstream consumes ratios
/// of these, so the convention cancels out as long as it is consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    pub count: usize,
    pub mean_a: f64,
    pub mean_b: f64,
    pub variance_a: f64,
    pub variance_b: f64,
    pub covariance_ab: f64,
    /// Second moment of A about the origin: `sum(a_i^2) / n`.
    pub mean_sq_a: f64,
    /// Second moment of B about the origin: `sum(b_i^2) / n`.
    pub mean_sq_b: f64,
    /// Mixed second moment about the origin: `sum(a_i * b_i) / n`.
    pub mean_ab: f64,
}

impl SampleStatistics {
    /// Compute statistics for a series in a single pass.
    ///
    /// Fails with [`Error::EmptySeries`] when the series holds no samples.
    pub fn compute(series: &PairedSeries) -> Result<Self> {
        if series.is_empty() {
            return Err(Error::EmptySeries);
        }
        let n = series.len() as f64;

        let mut sum_a = 0.0;
        let mut sum_b = 0.0;
        let mut sum_aa = 0.0;
        let mut sum_bb = 0.0;
        let mut sum_ab = 0.0;
        for (&a, &b) in series.a().iter().zip(series.b()) {
            sum_a += a;
            sum_b += b;
            sum_aa += a * a;
            sum_bb += b * b;
            sum_ab += a * b;
        }

        let mean_a = sum_a / n;
        let mean_b = sum_b / n;
        let mean_sq_a = sum_aa / n;
        let mean_sq_b = sum_bb / n;
        let mean_ab = sum_ab / n;

        Ok(Self {
            count: series.len(),
            mean_a,
            mean_b,
            // Rounding can push the one-pass variance a hair below zero;
            // clamp so downstream square roots stay defined.
            variance_a: (mean_sq_a - mean_a * mean_a).max(0.0),
            variance_b: (mean_sq_b - mean_b * mean_b).max(0.0),
            covariance_ab: mean_ab - mean_a * mean_b,
            mean_sq_a,
            mean_sq_b,
            mean_ab,
        })
    }
}
