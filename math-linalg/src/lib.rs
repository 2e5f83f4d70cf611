//! QR decomposition and a QR-based solver for dense linear systems
//!
//! This crate factors a matrix A into an orthonormal Q and an upper triangular R
//! with the classical Gram-Schmidt process, and solves `Ax = b` as
//! `x = R⁻¹·Qᵗ·b`.
//!
//! # Features
//!
//! - **Gram-Schmidt**: [`orthogonalize`], [`normalize`], [`gram_schmidt_orthonormalize`]
//! - **QR**: [`qr_decompose`] returning a [`QrDecomposition`]
//! - **Solver**: [`solve_linear_system`] on an augmented matrix `[A | b]`
//! - **Primitives**: the [`LinearAlgebraOps`] trait with the dense [`DenseOps`] backend
//! - **Generic Scalar Types**: `f64` and `f32` through [`RealField`]
//!
//! # Known limitation
//!
//! Classical Gram-Schmidt projects every column against the *original* input
//! column, so orthogonality degrades on ill-conditioned matrices. There is no
//! pivoting and no re-orthogonalization. Enable
//! [`QrConfig::check_orthonormality`] to get a warning when Qᵗ·Q drifts from
//! the identity.
//!
//! # Example
//!
//! ```
//! use math_linalg::{DenseOps, QrConfig, solve_linear_system_with};
//! use ndarray::array;
//!
//! let system = array![[1.0_f64, 0.0, 3.0], [0.0, 1.0, 5.0]];
//! let x = solve_linear_system_with(&DenseOps, &system, &QrConfig::default())?;
//! assert!((x[0] - 3.0).abs() < 1e-12 && (x[1] - 5.0).abs() < 1e-12);
//! # Ok::<(), math_linalg::LinalgError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod display;
pub mod error;
pub mod input;
pub mod qr;
pub mod traits;

// Re-export main types
pub use dense::{DenseOps, matrix_from_columns, matrix_from_rows};
pub use error::{LinalgError, Result};
pub use traits::{LinearAlgebraOps, RealField};

// Re-export decomposition and solver
pub use qr::{
    QrConfig, QrDecomposition, gram_schmidt_orthonormalize, gram_schmidt_orthonormalize_with,
    normalize, orthogonalize, qr_decompose, qr_decompose_with, solve_columns,
    solve_linear_system, solve_linear_system_with,
};

pub use direct::{LuFactorization, lu_factorize, lu_solve};
pub use display::{format_matrix, format_vector};
pub use input::{InputError, MatrixLayout, SystemInput};
