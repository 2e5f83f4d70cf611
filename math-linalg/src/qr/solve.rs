//! Solve linear systems through QR decomposition
//!
//! Writing A = Q·R turns A·x = b into Q·R·x = b. Since Qᵗ = Q⁻¹ for an
//! orthonormal Q:
//!
//! ```text
//! C = Qᵗ·b
//! x = R⁻¹·C
//! ```
//!
//! The system is given as an augmented matrix `[A | b]`.

use crate::dense::{DenseOps, matrix_from_columns};
use crate::display::format_matrix;
use crate::error::Result;
use crate::qr::QrConfig;
use crate::qr::decompose::qr_decompose_with;
use crate::traits::{LinearAlgebraOps, RealField};
use ndarray::{Array1, Array2};

/// Solve the augmented system `[A | b]` with an explicit backend and configuration.
///
/// Q and R are reported at the configured log level; the returned vector has
/// one entry per column of A, in column order.
pub fn solve_linear_system_with<T, O>(
    ops: &O,
    augmented: &Array2<T>,
    config: &QrConfig<T>,
) -> Result<Array1<T>>
where
    T: RealField,
    O: LinearAlgebraOps<T>,
{
    let (a, b) = ops.split_augmented(augmented)?;
    let qr = qr_decompose_with(ops, &a, config)?;

    let level = config.report_level();
    log::log!(level, "{}", format_matrix(&qr.q, "Q matrix:", config.precision));
    log::log!(level, "{}", format_matrix(&qr.r, "R matrix:", config.precision));

    qr.solve_with(ops, &b, config)
}

/// Solve the augmented system `[A | b]` with the dense backend.
///
/// # Example
///
/// ```
/// use math_linalg::solve_linear_system;
/// use ndarray::array;
///
/// // 2x = 4, 2y = 6
/// let system = array![[2.0_f64, 0.0, 4.0], [0.0, 2.0, 6.0]];
/// let x = solve_linear_system(&system).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub fn solve_linear_system<T: RealField>(augmented: &Array2<T>) -> Result<Array1<T>> {
    solve_linear_system_with(&DenseOps, augmented, &QrConfig::default())
}

/// Solve an augmented system given as columns: the coefficient columns of A
/// followed by b.
///
/// Ragged input is rejected before any arithmetic.
pub fn solve_columns<T: RealField>(columns: &[Vec<T>]) -> Result<Array1<T>> {
    let augmented = matrix_from_columns(columns)?;
    solve_linear_system(&augmented)
}
