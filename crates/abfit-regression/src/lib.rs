//! Linear regression methods for A vs B crossplot analysis
//!
//! This crate fits linear relationships between two co-located sample
//! series and caches the results per method, the way a crossplot view
//! consumes them: one fit line per method, selectable by acronym.
//!
//! # Methods
//!
//! - **Minimum Distance** (`PPD`): orthogonal regression minimizing
//!   perpendicular distances; symmetric in A and B.
//! - **Least Squares** (`LSQ`): ordinary fit of B on A minimizing
//!   vertical residuals.
//! - **Reduced Major Axis** (`RMA`): geometric-mean fit for errors in
//!   both variables.
//!
//! Each method supports two anchoring policies: [`RegressionType::Offset`]
//! (free intercept, line through the sample means) and
//! [`RegressionType::Origin`] (line forced through the origin).
//!
//! # Example
//!
//! ```rust
//! use abfit_core::PairedSeries;
//! use abfit_regression::{RegressionCatalog, RegressionType, SeriesAnalysis};
//!
//! let series = PairedSeries::new(
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![2.0, 4.0, 6.0, 8.0, 10.0],
//! )?;
//! let catalog = RegressionCatalog::builtin();
//! let analysis = SeriesAnalysis::compute(&series, &catalog, RegressionType::Offset);
//!
//! let lsq = analysis.get("LSQ").unwrap();
//! assert!((lsq.slope - 2.0).abs() < 1e-9);
//! # Ok::<(), abfit_core::Error>(())
//! ```
//!
//! Methods whose formula is degenerate for the data (e.g. zero variance in
//! A for a least-squares fit) are omitted from the analysis instead of
//! failing it; see [`SeriesAnalysis`].

mod analysis;
mod catalog;
mod least_squares;
mod min_distance;
mod reduced_major_axis;
mod types;

// Re-exports
pub use analysis::SeriesAnalysis;
pub use catalog::{MethodDescriptor, RegressionCatalog};
pub use types::{MethodKind, RegressionResult, RegressionType};
