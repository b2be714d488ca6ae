//! Types for regression fits

use abfit_core::{Result, SampleStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a fitted line is forced through the origin or allowed a free
/// intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegressionType {
    /// Line forced through (0, 0); the intercept is always zero.
    Origin,
    /// Line anchored through the sample means with a free intercept.
    Offset,
}

impl RegressionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Offset => "offset",
        }
    }
}

/// The closed set of regression methods.
///
/// Dispatch is by enum variant rather than dynamic lookup; each variant's
/// formula lives in its own module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    /// Orthogonal fit minimizing perpendicular distances (acronym "PPD").
    MinDistance,
    /// Ordinary fit of B on A minimizing vertical residuals ("LSQ").
    LeastSquares,
    /// Geometric-mean fit for errors in both variables ("RMA").
    ReducedMajorAxis,
}

impl MethodKind {
    /// Short acronym used as the method's catalog id.
    pub fn acronym(&self) -> &'static str {
        match self {
            Self::MinDistance => "PPD",
            Self::LeastSquares => "LSQ",
            Self::ReducedMajorAxis => "RMA",
        }
    }

    /// Human-readable method label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MinDistance => "Minimum Distance",
            Self::LeastSquares => "Least Squares",
            Self::ReducedMajorAxis => "Reduced Major Axis",
        }
    }

    /// Fit a line to the series summarized by `stats`.
    ///
    /// Pure function of its inputs. Fails with
    /// [`abfit_core::Error::DegenerateInput`] when the method's denominator
    /// vanishes (e.g. zero variance in A for a least-squares fit of B on A).
    pub fn fit(
        &self,
        stats: &SampleStatistics,
        regression: RegressionType,
    ) -> Result<RegressionResult> {
        match self {
            Self::MinDistance => crate::min_distance::fit(stats, regression),
            Self::LeastSquares => crate::least_squares::fit(stats, regression),
            Self::ReducedMajorAxis => crate::reduced_major_axis::fit(stats, regression),
        }
    }
}

/// A fitted line `b = slope * a + intercept`.
///
/// A vertical fit (only produced by [`MethodKind::MinDistance`] when A has
/// zero variance) is encoded as `slope == f64::INFINITY`; its intercept is
/// NaN for offset fits and 0.0 for origin fits, and [`Self::predict`] is
/// undefined for it. Check [`Self::is_vertical`] before evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub method: MethodKind,
    pub regression: RegressionType,
}

impl RegressionResult {
    pub fn new(
        slope: f64,
        intercept: f64,
        method: MethodKind,
        regression: RegressionType,
    ) -> Self {
        Self {
            slope,
            intercept,
            method,
            regression,
        }
    }

    /// Evaluate the fitted line at `a`.
    pub fn predict(&self, a: f64) -> f64 {
        self.slope * a + self.intercept
    }

    /// True for the vertical-line encoding of an orthogonal fit.
    pub fn is_vertical(&self) -> bool {
        self.slope.is_infinite()
    }
}

impl fmt::Display for RegressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): slope = {:.6}, intercept = {:.6}",
            self.method.display_name(),
            self.regression.name(),
            self.slope,
            self.intercept
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_acronyms_unique() {
        let kinds = [
            MethodKind::MinDistance,
            MethodKind::LeastSquares,
            MethodKind::ReducedMajorAxis,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.acronym(), b.acronym());
            }
        }
    }

    #[test]
    fn test_predict() {
        let fit = RegressionResult::new(2.0, 3.0, MethodKind::LeastSquares, RegressionType::Offset);
        assert_abs_diff_eq!(fit.predict(0.0), 3.0);
        assert_abs_diff_eq!(fit.predict(5.0), 13.0);
        assert!(!fit.is_vertical());
    }

    #[test]
    fn test_vertical_encoding() {
        let fit = RegressionResult::new(
            f64::INFINITY,
            f64::NAN,
            MethodKind::MinDistance,
            RegressionType::Offset,
        );
        assert!(fit.is_vertical());
    }

    #[test]
    fn test_serde_round_trip() {
        let fit = RegressionResult::new(
            -1.5,
            4.25,
            MethodKind::ReducedMajorAxis,
            RegressionType::Offset,
        );
        let json = serde_json::to_string(&fit).unwrap();
        let back: RegressionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(fit, back);
    }

    #[test]
    fn test_display() {
        let fit = RegressionResult::new(2.0, 3.0, MethodKind::LeastSquares, RegressionType::Offset);
        let text = format!("{fit}");
        assert!(text.contains("Least Squares"));
        assert!(text.contains("offset"));
        assert!(text.contains("2.000000"));
    }
}
