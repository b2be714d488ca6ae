//! Orthogonal (minimum-distance) fit
//!
//! Minimizes the sum of squared perpendicular distances from points to the
//! line. The slope is the direction of the eigenvector belonging to the
//! larger eigenvalue of the 2x2 second-moment matrix: central moments for
//! the offset form, moments about the origin for the origin form.
//!
//! Unlike the other methods this one always has an answer:
//!
//! - zero covariance with more spread in B than A yields the vertical line
//!   `a = mean_a`, encoded as `slope = INFINITY` (intercept NaN for offset
//!   fits, 0.0 for origin fits);
//! - isotropic scatter (equal spread, zero covariance) leaves the principal
//!   axis undefined, and the fit falls back to the 45-degree line
//!   `slope = 1.0` so callers always see a deterministic result.

use crate::types::{MethodKind, RegressionResult, RegressionType};
use abfit_core::{Result, SampleStatistics};

/// Slope of the principal axis of the symmetric matrix [[sxx, sxy], [sxy, syy]].
///
/// The vertical/horizontal/isotropic special cases trigger only on an
/// exactly zero `sxy`. A cross moment that is merely tiny from accumulated
/// rounding takes the general branch and yields a correspondingly steep or
/// shallow finite slope, which converges to the special-case lines as
/// `sxy` approaches zero.
fn principal_slope(sxx: f64, syy: f64, sxy: f64) -> f64 {
    if sxy == 0.0 {
        if syy > sxx {
            f64::INFINITY
        } else if sxx > syy {
            0.0
        } else {
            // Isotropic scatter: every direction fits equally well.
            1.0
        }
    } else {
        let d = syy - sxx;
        (d + (d * d + 4.0 * sxy * sxy).sqrt()) / (2.0 * sxy)
    }
}

pub(crate) fn fit(
    stats: &SampleStatistics,
    regression: RegressionType,
) -> Result<RegressionResult> {
    let (slope, intercept) = match regression {
        RegressionType::Offset => {
            let slope = principal_slope(stats.variance_a, stats.variance_b, stats.covariance_ab);
            let intercept = if slope.is_infinite() {
                f64::NAN
            } else {
                stats.mean_b - slope * stats.mean_a
            };
            (slope, intercept)
        }
        RegressionType::Origin => {
            let slope = principal_slope(stats.mean_sq_a, stats.mean_sq_b, stats.mean_ab);
            (slope, 0.0)
        }
    };
    Ok(RegressionResult::new(
        slope,
        intercept,
        MethodKind::MinDistance,
        regression,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use abfit_core::PairedSeries;
    use approx::assert_abs_diff_eq;

    fn stats(a: &[f64], b: &[f64]) -> SampleStatistics {
        let series = PairedSeries::new(a.to_vec(), b.to_vec()).unwrap();
        SampleStatistics::compute(&series).unwrap()
    }

    #[test]
    fn test_perfect_line_recovered_exactly() {
        // With no scatter the orthogonal fit coincides with least squares.
        let a: Vec<f64> = (0..10).map(f64::from).collect();
        let b: Vec<f64> = a.iter().map(|&ai| 2.0 * ai + 3.0).collect();
        let fit = fit(&stats(&a, &b), RegressionType::Offset).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.intercept, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_in_a_and_b() {
        // Swapping the roles of A and B must invert the slope; vertical
        // residual fits do not have this property, orthogonal fits do.
        let a = [1.0, 2.0, 4.0, 5.0, 9.0];
        let b = [1.5, 2.2, 4.9, 4.4, 8.1];
        let forward = fit(&stats(&a, &b), RegressionType::Offset).unwrap();
        let reverse = fit(&stats(&b, &a), RegressionType::Offset).unwrap();
        assert_abs_diff_eq!(forward.slope, 1.0 / reverse.slope, epsilon = 1e-9);
    }

    #[test]
    fn test_vertical_line_policy() {
        // Constant A with varying B: the perpendicular-distance minimizer
        // is the vertical line a = mean_a.
        let fit = fit(&stats(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]), RegressionType::Offset).unwrap();
        assert!(fit.is_vertical());
        assert!(fit.slope.is_infinite());
        assert!(fit.intercept.is_nan());
    }

    #[test]
    fn test_vertical_line_origin_keeps_zero_intercept() {
        let fit = fit(&stats(&[0.0, 0.0], &[1.0, 2.0]), RegressionType::Origin).unwrap();
        assert!(fit.is_vertical());
        assert_eq!(fit.intercept, 0.0);
    }

    #[test]
    fn test_horizontal_line() {
        let fit = fit(&stats(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), RegressionType::Offset).unwrap();
        assert_abs_diff_eq!(fit.slope, 0.0);
        assert_abs_diff_eq!(fit.intercept, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_isotropic_tie_break() {
        // Four points at the corners of a square: equal variances, zero
        // covariance. The fit falls back to slope 1 deterministically.
        let fit = fit(
            &stats(&[-1.0, 1.0, -1.0, 1.0], &[-1.0, -1.0, 1.0, 1.0]),
            RegressionType::Offset,
        )
        .unwrap();
        assert_abs_diff_eq!(fit.slope, 1.0);
        assert_abs_diff_eq!(fit.intercept, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_near_zero_cross_moment_stays_finite() {
        // A rounding-level cross moment takes the general branch: the slope
        // is finite but steep, tending to the vertical line as the cross
        // moment shrinks.
        let slope = principal_slope(0.0, 1.0, 1e-15);
        assert!(slope.is_finite());
        assert!(slope > 1e12);

        let shallow = principal_slope(1.0, 0.0, 1e-15);
        assert!(shallow.is_finite());
        assert!((0.0..1e-12).contains(&shallow));
    }

    #[test]
    fn test_slope_sign_follows_covariance() {
        let fit = fit(&stats(&[1.0, 2.0, 3.0], &[3.1, 2.0, 0.9]), RegressionType::Offset).unwrap();
        assert!(fit.slope < 0.0);
    }

    #[test]
    fn test_principal_slope_is_larger_eigenvalue_direction() {
        // For sxx = 1, syy = 3, sxy = 1 the eigenvalues are 2 +/- sqrt(2);
        // the major-axis slope is (syy - sxx + sqrt(...)) / (2 sxy).
        let expected = (2.0 + 8.0_f64.sqrt()) / 2.0;
        assert_abs_diff_eq!(principal_slope(1.0, 3.0, 1.0), expected, epsilon = 1e-12);
    }
}
