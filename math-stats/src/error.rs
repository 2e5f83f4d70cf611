//! Error types for the statistics routines.

use thiserror::Error;

/// Errors that can occur while computing a statistic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The input slice is empty.
    #[error("input is empty")]
    EmptyInput,

    /// Not enough observations for the requested statistic.
    #[error("need at least {needed} observations, got {got}")]
    InsufficientData {
        /// Minimum number of observations
        needed: usize,
        /// Number of observations provided
        got: usize,
    },

    /// Paired inputs have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first input
        left: usize,
        /// Length of the second input
        right: usize,
    },

    /// An explicit divisor (degrees of freedom) of zero.
    #[error("divisor must be > 0")]
    InvalidDivisor,

    /// Percentile outside [0, 1].
    #[error("invalid percentile: {percent} (must be in [0, 1])")]
    InvalidPercentile {
        /// The requested fraction
        percent: f64,
    },

    /// A statistic divides by a spread that is zero.
    #[error("zero variance")]
    ZeroVariance,

    /// The input contains NaN or infinity.
    #[error("non-finite value at index {index}")]
    NonFinite {
        /// Position of the first offending value
        index: usize,
    },
}

/// A specialized `Result` type for statistics.
pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    /// Returns `true` if the input was too small or empty.
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            StatsError::EmptyInput
                | StatsError::InsufficientData { .. }
                | StatsError::LengthMismatch { .. }
        )
    }

    /// Returns `true` if the input data itself is unusable.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StatsError::ZeroVariance | StatsError::NonFinite { .. }
        )
    }
}

/// First non-finite value of `data`, if any
pub(crate) fn check_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Both slices must be non-empty, finite and of equal length
pub(crate) fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    check_finite(x)?;
    check_finite(y)
}
