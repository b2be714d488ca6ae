//! Error types for paired-series regression
//!
//! Provides a unified error type for all abfit crates.

use thiserror::Error;

/// Core error type for paired-series operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input arrays disagree on length
    #[error("Length mismatch in {context}: expected {expected} samples, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Statistics requested on a zero-length series
    #[error("Empty series: statistics and regressions are undefined")]
    EmptySeries,

    /// A regression method's denominator vanished for this input
    #[error("Degenerate input for {method}: {reason}")]
    DegenerateInput {
        method: &'static str,
        reason: &'static str,
    },

    /// Catalog registration collided with an existing method id
    #[error("Duplicate regression method id: {0}")]
    DuplicateMethod(String),

    /// Catalog lookup for an unregistered method id
    #[error("Unknown regression method id: {0}")]
    UnknownMethod(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a coordinate array whose length disagrees with `a`
    pub fn length_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Create an error for a zero denominator in a regression formula
    pub fn degenerate(method: &'static str, reason: &'static str) -> Self {
        Self::DegenerateInput { method, reason }
    }

    /// True when this error means "skip this method, keep the rest"
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::length_mismatch("b values", 10, 7);
        assert_eq!(
            err.to_string(),
            "Length mismatch in b values: expected 10 samples, got 7"
        );

        let err = Error::EmptySeries;
        assert_eq!(
            err.to_string(),
            "Empty series: statistics and regressions are undefined"
        );

        let err = Error::degenerate("LSQ", "zero variance in A");
        assert_eq!(
            err.to_string(),
            "Degenerate input for LSQ: zero variance in A"
        );

        let err = Error::DuplicateMethod("LSQ".to_string());
        assert_eq!(err.to_string(), "Duplicate regression method id: LSQ");

        let err = Error::UnknownMethod("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown regression method id: XYZ");
    }

    #[test]
    fn test_is_degenerate() {
        assert!(Error::degenerate("RMA", "zero variance in A").is_degenerate());
        assert!(!Error::EmptySeries.is_degenerate());
        assert!(!Error::length_mismatch("x values", 3, 2).is_degenerate());
    }

    #[test]
    fn test_result_type_alias() {
        fn validate_count(n: usize) -> Result<usize> {
            if n == 0 {
                return Err(Error::EmptySeries);
            }
            Ok(n)
        }

        assert_eq!(validate_count(5).unwrap(), 5);
        assert!(validate_count(0).is_err());
    }
}
