//! Ordinary least-squares fit of B on A
//!
//! Minimizes the sum of squared vertical (B-direction) residuals. The
//! offset form is the textbook `slope = cov(a,b) / var(a)` with the line
//! anchored through the sample means; the origin form replaces central
//! moments with moments about the origin, which is equivalent to
//! `slope = sum(a_i * b_i) / sum(a_i^2)`.

use crate::types::{MethodKind, RegressionResult, RegressionType};
use abfit_core::{Error, Result, SampleStatistics};

pub(crate) fn fit(
    stats: &SampleStatistics,
    regression: RegressionType,
) -> Result<RegressionResult> {
    let (slope, intercept) = match regression {
        RegressionType::Offset => {
            if stats.variance_a == 0.0 {
                return Err(Error::degenerate("LSQ", "zero variance in A"));
            }
            let slope = stats.covariance_ab / stats.variance_a;
            (slope, stats.mean_b - slope * stats.mean_a)
        }
        RegressionType::Origin => {
            if stats.mean_sq_a == 0.0 {
                return Err(Error::degenerate("LSQ", "zero second moment of A"));
            }
            (stats.mean_ab / stats.mean_sq_a, 0.0)
        }
    };
    Ok(RegressionResult::new(
        slope,
        intercept,
        MethodKind::LeastSquares,
        regression,
    ))
}
