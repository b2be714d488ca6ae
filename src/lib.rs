//! Paired-series regression toolkit for A vs B crossplot analysis
//!
//! `abfit` fits linear relationships between two co-located sample series
//! (the "A" and "B" attributes of a crossplot) and reports the fit
//! parameters plus descriptive statistics of the input distribution. It
//! re-exports the workspace crates:
//!
//! - [`abfit_core`]: [`PairedSeries`], [`SampleStatistics`], and the
//!   shared [`Error`] type.
//! - [`abfit_regression`]: the three fitting methods (minimum distance,
//!   least squares, reduced major axis), the method catalog, and the
//!   per-series orchestration.
//!
//! # Quick start
//!
//! ```rust
//! use abfit::{analyze, PairedSeries, RegressionType};
//!
//! let series = PairedSeries::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![3.0, 5.0, 7.0, 9.0, 11.0],
//! )?;
//! let analysis = analyze(&series, RegressionType::Offset);
//!
//! let lsq = analysis.get("LSQ").unwrap();
//! assert!((lsq.slope - 2.0).abs() < 1e-9);
//! assert!((lsq.intercept - 3.0).abs() < 1e-9);
//! # Ok::<(), abfit::Error>(())
//! ```

pub use abfit_core::{
    Error, PairedSeries, Result, SampleStatistics, SeriesBounds, SeriesCoordinates,
};
pub use abfit_regression::{
    MethodDescriptor, MethodKind, RegressionCatalog, RegressionResult, RegressionType,
    SeriesAnalysis,
};

/// Fit every built-in regression method to a series.
///
/// Convenience wrapper over [`SeriesAnalysis::compute`] with
/// [`RegressionCatalog::builtin`]; callers that register their own method
/// aliases should build a catalog and call `compute` directly.
pub fn analyze(series: &PairedSeries, regression: RegressionType) -> SeriesAnalysis {
    SeriesAnalysis::compute(series, &RegressionCatalog::builtin(), regression)
}
