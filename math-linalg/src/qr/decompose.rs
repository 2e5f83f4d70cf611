//! QR decomposition
//!
//! A = Q·R with Q the Gram-Schmidt orthonormal basis of A's columns and
//! R = Qᵗ·A, upper triangular because column c of A only has components along
//! the first c + 1 basis vectors.

use crate::dense::DenseOps;
use crate::display::format_matrix;
use crate::error::{LinalgError, Result};
use crate::qr::QrConfig;
use crate::qr::gram_schmidt::gram_schmidt_orthonormalize_with;
use crate::traits::{LinearAlgebraOps, RealField};
use ndarray::{Array1, Array2};

/// Result of a QR decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<T: RealField> {
    /// Orthonormal factor, same shape as A (n x m)
    pub q: Array2<T>,
    /// Upper triangular factor (m x m)
    pub r: Array2<T>,
}

impl<T: RealField> QrDecomposition<T> {
    /// Number of equations (rows of A)
    pub fn nrows(&self) -> usize {
        self.q.nrows()
    }

    /// Number of unknowns (columns of A)
    pub fn ncols(&self) -> usize {
        self.q.ncols()
    }

    /// Q·R, which reproduces A up to rounding
    pub fn reconstruct<O: LinearAlgebraOps<T>>(&self, ops: &O) -> Result<Array2<T>> {
        ops.matmul(&self.q, &self.r)
    }

    /// Largest entry of |Qᵗ·Q - I|
    pub fn orthonormality_defect<O: LinearAlgebraOps<T>>(&self, ops: &O) -> Result<T> {
        let qtq = ops.matmul(&ops.transpose(&self.q), &self.q)?;
        Ok(identity_defect(&qtq))
    }

    /// Solve A·x = b with the stored factors: x = R⁻¹·(Qᵗ·b)
    pub fn solve<O: LinearAlgebraOps<T>>(&self, ops: &O, b: &Array1<T>) -> Result<Array1<T>> {
        self.solve_with(ops, b, &QrConfig::default())
    }

    /// Same as [`QrDecomposition::solve`], reporting R⁻¹ and R·R⁻¹ at the
    /// configured log level
    pub fn solve_with<O: LinearAlgebraOps<T>>(
        &self,
        ops: &O,
        b: &Array1<T>,
        config: &QrConfig<T>,
    ) -> Result<Array1<T>> {
        if b.len() != self.nrows() {
            return Err(LinalgError::ShapeMismatch {
                context: "right-hand side length",
                expected: self.nrows(),
                got: b.len(),
            });
        }

        // C = Qᵗ·b, one entry per unknown
        let c = ops.matvec(&ops.transpose(&self.q), b)?;
        let r_inverse = ops.inverse(&self.r)?;

        let level = config.report_level();
        if log::log_enabled!(level) {
            log::log!(
                level,
                "{}",
                format_matrix(&r_inverse, "Inverse R matrix:", config.precision)
            );
            if let Ok(identity) = ops.matmul(&self.r, &r_inverse) {
                log::log!(
                    level,
                    "{}",
                    format_matrix(&identity, "R@R-1 = I matrix:", config.precision)
                );
            }
        }

        ops.matvec(&r_inverse, &c)
    }
}

/// Largest absolute deviation of a square matrix from the identity
fn identity_defect<T: RealField>(m: &Array2<T>) -> T {
    m.indexed_iter()
        .map(|((i, j), &v)| {
            let expected = if i == j { T::one() } else { T::zero() };
            (v - expected).abs()
        })
        .fold(T::zero(), |acc, d| acc.max(d))
}

/// QR decomposition of `a` with an explicit backend and configuration.
///
/// `a` must have at least one column and no more columns than rows.
pub fn qr_decompose_with<T, O>(
    ops: &O,
    a: &Array2<T>,
    config: &QrConfig<T>,
) -> Result<QrDecomposition<T>>
where
    T: RealField,
    O: LinearAlgebraOps<T>,
{
    let (n, m) = a.dim();
    if n == 0 || m == 0 {
        return Err(LinalgError::ShapeMismatch {
            context: "QR input must be non-empty",
            expected: 1,
            got: 0,
        });
    }
    if m > n {
        return Err(LinalgError::ShapeMismatch {
            context: "QR needs at least as many rows as columns",
            expected: n,
            got: m,
        });
    }

    let q = gram_schmidt_orthonormalize_with(ops, a, config)?;
    let r = ops.matmul(&ops.transpose(&q), a)?;
    let decomposition = QrDecomposition { q, r };

    if config.check_orthonormality {
        let defect = decomposition.orthonormality_defect(ops)?;
        log::debug!(
            "QR: max |Q^T Q - I| = {:e}",
            defect.to_f64().unwrap_or(f64::NAN)
        );
        if defect > config.orthonormality_tolerance {
            log::warn!(
                "QR: Q lost orthonormality (max |Q^T Q - I| = {:e}, tolerance {:e}); input is ill-conditioned",
                defect.to_f64().unwrap_or(f64::NAN),
                config.orthonormality_tolerance.to_f64().unwrap_or(f64::NAN)
            );
        }
    }

    Ok(decomposition)
}

/// QR decomposition of `a` with the dense backend and default configuration.
///
/// # Example
///
/// ```
/// use math_linalg::qr_decompose;
/// use ndarray::array;
///
/// let a = array![[1.0_f64, 1.0], [0.0, 1.0], [1.0, 0.0]];
/// let qr = qr_decompose(&a).unwrap();
/// assert_eq!(qr.q.dim(), (3, 2));
/// assert_eq!(qr.r.dim(), (2, 2));
/// assert!(qr.r[[1, 0]].abs() < 1e-12);
/// ```
pub fn qr_decompose<T: RealField>(a: &Array2<T>) -> Result<QrDecomposition<T>> {
    qr_decompose_with(&DenseOps, a, &QrConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_qr_reconstructs_a() {
        let a = array![[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]];
        let qr = qr_decompose(&a).unwrap();
        let qr_product = qr.reconstruct(&DenseOps).unwrap();

        for ((i, j), &v) in a.indexed_iter() {
            assert_relative_eq!(qr_product[[i, j]], v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_qr_known_factors() {
        // Classic textbook example: R = [[14, 21, -14], [0, 175, -70], [0, 0, 35]]
        let a = array![[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]];
        let qr = qr_decompose(&a).unwrap();

        let expected_r = array![[14.0, 21.0, -14.0], [0.0, 175.0, -70.0], [0.0, 0.0, 35.0]];
        for ((i, j), &v) in expected_r.indexed_iter() {
            assert_relative_eq!(qr.r[[i, j]], v, epsilon = 1e-9);
        }
        assert_relative_eq!(qr.q[[0, 0]], 6.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(qr.q[[1, 0]], 3.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(qr.q[[2, 0]], -2.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_r_is_upper_triangular() {
        let a = array![
            [1.0_f64, 2.0, 0.0],
            [2.0, -1.0, 3.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0]
        ];
        let qr = qr_decompose(&a).unwrap();

        for i in 0..3 {
            for j in 0..i {
                assert_relative_eq!(qr.r[[i, j]], 0.0, epsilon = 1e-12);
            }
        }
        assert!(qr.orthonormality_defect(&DenseOps).unwrap() < 1e-12);
    }

    #[test]
    fn test_qr_is_idempotent() {
        let a = array![[2.0_f64, 1.0], [1.0, 3.0], [0.5, -1.0]];
        let first = qr_decompose(&a).unwrap();
        let second = qr_decompose(&a).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_qr_rejects_wide_matrix() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let err = qr_decompose(&a).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                context: "QR needs at least as many rows as columns",
                expected: 2,
                got: 3,
            }
        );
    }

    #[test]
    fn test_qr_rejects_empty() {
        let a = Array2::<f64>::zeros((3, 0));
        assert!(qr_decompose(&a).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_qr_degenerate_input() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0], [3.0, 6.0]];
        assert!(qr_decompose(&a).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_check_orthonormality_keeps_result() {
        let a = array![[4.0_f64, 1.0], [2.0, 3.0]];
        let checked = QrConfig {
            check_orthonormality: true,
            ..QrConfig::default()
        };
        let plain = qr_decompose(&a).unwrap();
        let with_check = qr_decompose_with(&DenseOps, &a, &checked).unwrap();
        assert_eq!(plain, with_check);
    }

    #[test]
    fn test_solve_rhs_length() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let qr = qr_decompose(&a).unwrap();
        let err = qr.solve(&DenseOps, &array![1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_solve_several_rhs() {
        let a = array![[3.0_f64, 1.0], [1.0, 2.0]];
        let qr = qr_decompose(&a).unwrap();

        for b in [array![9.0_f64, 8.0], array![1.0, 0.0]] {
            let x = qr.solve(&DenseOps, &b).unwrap();
            let ax = a.dot(&x);
            assert_relative_eq!(ax[0], b[0], epsilon = 1e-12);
            assert_relative_eq!(ax[1], b[1], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_defect() {
        let m = array![[1.0_f64, 0.25], [0.0, 0.5]];
        assert_relative_eq!(identity_defect(&m), 0.5);
    }
}
