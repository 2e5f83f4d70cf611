//! Error types for the QR decomposition and the dense primitives behind it.
//!
//! Every failure is fatal for the call that raised it: there is no retry and no
//! partial result. The variants map onto the three ways a system can be
//! ill-posed for classical Gram-Schmidt QR.

use thiserror::Error;

/// Errors that can occur while decomposing or solving a linear system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A column is zero, duplicated, or linearly dependent on earlier columns.
    #[error("degenerate input: column {column} is zero or linearly dependent on earlier columns")]
    DegenerateInput {
        /// Index of the column that collapsed during orthogonalization
        column: usize,
    },

    /// A matrix could not be inverted (not square, or a zero pivot).
    #[error("matrix is singular or not square")]
    SingularMatrix,

    /// Dimensions of the operands do not agree.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which check failed
        context: &'static str,
        /// Expected size
        expected: usize,
        /// Actual size
        got: usize,
    },
}

/// A specialized `Result` type for linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

impl LinalgError {
    /// Returns `true` if the input columns were rank deficient.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, LinalgError::DegenerateInput { .. })
    }

    /// Returns `true` if a matrix inversion failed.
    pub fn is_singular(&self) -> bool {
        matches!(self, LinalgError::SingularMatrix)
    }

    /// Returns `true` if this is a dimension error.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, LinalgError::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinalgError::ShapeMismatch {
            context: "matmul inner dimension",
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch in matmul inner dimension: expected 3, got 2"
        );

        let err = LinalgError::DegenerateInput { column: 1 };
        assert!(err.to_string().contains("column 1"));
    }

    #[test]
    fn test_error_categories() {
        let degenerate = LinalgError::DegenerateInput { column: 0 };
        let singular = LinalgError::SingularMatrix;
        let shape = LinalgError::ShapeMismatch {
            context: "augmented matrix columns",
            expected: 2,
            got: 1,
        };

        assert!(degenerate.is_degenerate());
        assert!(!degenerate.is_singular());
        assert!(singular.is_singular());
        assert!(!singular.is_shape_error());
        assert!(shape.is_shape_error());
        assert!(!shape.is_degenerate());
    }
}
