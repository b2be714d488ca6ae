//! Reduced-major-axis fit
//!
//! Geometric-mean regression for the case where both variables carry
//! measurement error: the slope magnitude is the ratio of spreads,
//! `sqrt(var(b) / var(a))`, signed by the covariance. The origin form uses
//! the root-mean-square ratio of the raw samples instead of the centered
//! spreads. A zero covariance leaves the sign convention at +1.

use crate::types::{MethodKind, RegressionResult, RegressionType};
use abfit_core::{Error, Result, SampleStatistics};

fn signed_sqrt_ratio(numerator: f64, denominator: f64, sign_source: f64) -> f64 {
    let magnitude = (numerator / denominator).sqrt();
    if sign_source < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

pub(crate) fn fit(
    stats: &SampleStatistics,
    regression: RegressionType,
) -> Result<RegressionResult> {
    let (slope, intercept) = match regression {
        RegressionType::Offset => {
            if stats.variance_a == 0.0 {
                return Err(Error::degenerate("RMA", "zero variance in A"));
            }
            let slope = signed_sqrt_ratio(stats.variance_b, stats.variance_a, stats.covariance_ab);
            (slope, stats.mean_b - slope * stats.mean_a)
        }
        RegressionType::Origin => {
            if stats.mean_sq_a == 0.0 {
                return Err(Error::degenerate("RMA", "zero second moment of A"));
            }
            let slope = signed_sqrt_ratio(stats.mean_sq_b, stats.mean_sq_a, stats.mean_ab);
            (slope, 0.0)
        }
    };
    Ok(RegressionResult::new(
        slope,
        intercept,
        MethodKind::ReducedMajorAxis,
        regression,
    ))
}
