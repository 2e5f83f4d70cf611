//! Core traits for the QR solver
//!
//! This module defines the two abstractions the decomposition is written against:
//! - [`RealField`]: Trait for the real scalar types the solver works with
//! - [`LinearAlgebraOps`]: The dense primitives (dot, transpose, matmul, inverse, ...)
//!   consumed by the Gram-Schmidt, decomposition and solve steps

use crate::error::{LinalgError, Result};
use ndarray::{Array1, Array2, ArrayView1, s};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable by the solver.
///
/// Besides the arithmetic from [`Float`], each type carries the tolerances the
/// solver falls back to when no explicit configuration is given.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, recommended for stability of classical Gram-Schmidt)
/// - `f32`
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Relative size below which an orthogonalized column counts as zero
    fn degeneracy_tolerance() -> Self;

    /// Largest accepted deviation of Qᵗ·Q from the identity
    fn orthonormality_tolerance() -> Self;

    /// Pivot magnitude below which LU treats a matrix as singular
    fn pivot_tolerance() -> Self;
}

impl RealField for f64 {
    #[inline]
    fn degeneracy_tolerance() -> Self {
        1e-10
    }

    #[inline]
    fn orthonormality_tolerance() -> Self {
        1e-8
    }

    #[inline]
    fn pivot_tolerance() -> Self {
        1e-30
    }
}

impl RealField for f32 {
    #[inline]
    fn degeneracy_tolerance() -> Self {
        1e-5
    }

    #[inline]
    fn orthonormality_tolerance() -> Self {
        1e-4
    }

    #[inline]
    fn pivot_tolerance() -> Self {
        1e-20
    }
}

/// Dense linear algebra primitives consumed by the QR decomposition.
///
/// Matrices are `(rows, columns)`; the decomposition works column by column
/// and reaches into this trait for every inner product, product and inversion.
/// Swapping the implementation lets the core be exercised against stubs.
pub trait LinearAlgebraOps<T: RealField>: Send + Sync {
    /// Euclidean inner product ⟨u, v⟩
    fn dot(&self, u: ArrayView1<T>, v: ArrayView1<T>) -> Result<T>;

    /// Swap rows and columns
    fn transpose(&self, m: &Array2<T>) -> Array2<T>;

    /// Matrix product a·b
    fn matmul(&self, a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>>;

    /// Matrix-vector product a·x
    fn matvec(&self, a: &Array2<T>, x: &Array1<T>) -> Result<Array1<T>>;

    /// Inverse of a square matrix
    fn inverse(&self, m: &Array2<T>) -> Result<Array2<T>>;

    /// Euclidean norm ‖v‖
    fn vector_norm(&self, v: ArrayView1<T>) -> T;

    /// Split an augmented matrix `[A | b]` into `A` and its last column `b`
    fn split_augmented(&self, m: &Array2<T>) -> Result<(Array2<T>, Array1<T>)> {
        let (rows, cols) = m.dim();
        if cols < 2 {
            return Err(LinalgError::ShapeMismatch {
                context: "augmented matrix columns",
                expected: 2,
                got: cols,
            });
        }
        if rows == 0 {
            return Err(LinalgError::ShapeMismatch {
                context: "augmented matrix rows",
                expected: 1,
                got: 0,
            });
        }

        let a = m.slice(s![.., ..cols - 1]).to_owned();
        let b = m.column(cols - 1).to_owned();
        Ok((a, b))
    }
}
