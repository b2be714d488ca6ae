//! Core types for A vs B crossplot regression analysis
//!
//! This crate provides the data container and descriptive statistics that
//! the regression methods in `abfit-regression` consume:
//!
//! - [`PairedSeries`]: two equal-length sample arrays (with optional
//!   spatial coordinates), validated at construction and immutable after.
//! - [`SampleStatistics`]: means, population variances, covariance, and
//!   origin second moments, computed in a single pass.
//! - [`Error`] / [`Result`]: the unified error type shared by all abfit
//!   crates.
//!
//! # Example
//!
//! ```rust
//! use abfit_core::{PairedSeries, SampleStatistics};
//!
//! let series = PairedSeries::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0])?;
//! let stats = SampleStatistics::compute(&series)?;
//! assert_eq!(stats.count, 3);
//! # Ok::<(), abfit_core::Error>(())
//! ```

pub mod error;
pub mod series;
pub mod stats;

pub use error::{Error, Result};
pub use series::{PairedSeries, SeriesBounds, SeriesCoordinates};
pub use stats::SampleStatistics;
