//! Dense implementation of the linear algebra primitives
//!
//! [`DenseOps`] is the default [`LinearAlgebraOps`] backend: plain loops over
//! `ndarray` storage, with matrix inversion delegated to the LU solver.
//! The free functions build matrices from nested vectors, validating that the
//! input is rectangular before any arithmetic happens.

use crate::direct::lu_factorize;
use crate::error::{LinalgError, Result};
use crate::traits::{LinearAlgebraOps, RealField};
use ndarray::{Array1, Array2, ArrayView1};

/// Dense, in-memory linear algebra backend
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseOps;

impl<T: RealField> LinearAlgebraOps<T> for DenseOps {
    /// Compute inner product ⟨u, v⟩ = Σ u_i * v_i
    #[inline]
    fn dot(&self, u: ArrayView1<T>, v: ArrayView1<T>) -> Result<T> {
        if u.len() != v.len() {
            return Err(LinalgError::ShapeMismatch {
                context: "inner product length",
                expected: u.len(),
                got: v.len(),
            });
        }
        let mut sum = T::zero();
        for (ui, vi) in u.iter().zip(v.iter()) {
            sum += *ui * *vi;
        }
        Ok(sum)
    }

    fn transpose(&self, m: &Array2<T>) -> Array2<T> {
        m.t().as_standard_layout().into_owned()
    }

    fn matmul(&self, a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>> {
        let (n, k) = a.dim();
        if k != b.nrows() {
            return Err(LinalgError::ShapeMismatch {
                context: "matmul inner dimension",
                expected: k,
                got: b.nrows(),
            });
        }
        let m = b.ncols();

        let mut c = Array2::<T>::zeros((n, m));
        for i in 0..n {
            for l in 0..k {
                let a_il = a[[i, l]];
                for j in 0..m {
                    c[[i, j]] += a_il * b[[l, j]];
                }
            }
        }
        Ok(c)
    }

    fn matvec(&self, a: &Array2<T>, x: &Array1<T>) -> Result<Array1<T>> {
        if a.ncols() != x.len() {
            return Err(LinalgError::ShapeMismatch {
                context: "matrix-vector length",
                expected: a.ncols(),
                got: x.len(),
            });
        }
        let mut y = Array1::<T>::zeros(a.nrows());
        for (yi, row) in y.iter_mut().zip(a.rows()) {
            for (aij, xj) in row.iter().zip(x.iter()) {
                *yi += *aij * *xj;
            }
        }
        Ok(y)
    }

    fn inverse(&self, m: &Array2<T>) -> Result<Array2<T>> {
        if m.nrows() != m.ncols() || m.is_empty() {
            return Err(LinalgError::SingularMatrix);
        }
        lu_factorize(m)?.inverse()
    }

    /// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
    #[inline]
    fn vector_norm(&self, v: ArrayView1<T>) -> T {
        let mut sum = T::zero();
        for vi in v.iter() {
            sum += *vi * *vi;
        }
        sum.sqrt()
    }
}

/// Build an `(n, m)` matrix from `m` columns of length `n`.
///
/// Fails with [`LinalgError::ShapeMismatch`] on an empty list, empty columns,
/// or columns of different lengths.
pub fn matrix_from_columns<T: RealField>(columns: &[Vec<T>]) -> Result<Array2<T>> {
    let n = check_rectangular(columns, "column length")?;
    Ok(Array2::from_shape_fn((n, columns.len()), |(i, j)| {
        columns[j][i]
    }))
}

/// Build an `(n, m)` matrix from `n` rows of length `m`.
pub fn matrix_from_rows<T: RealField>(rows: &[Vec<T>]) -> Result<Array2<T>> {
    let m = check_rectangular(rows, "row length")?;
    Ok(Array2::from_shape_fn((rows.len(), m), |(i, j)| rows[i][j]))
}

/// Common length of all `lines`, or a shape error
fn check_rectangular<T>(lines: &[Vec<T>], context: &'static str) -> Result<usize> {
    let first = lines.first().ok_or(LinalgError::ShapeMismatch {
        context: "matrix is empty",
        expected: 1,
        got: 0,
    })?;
    let len = first.len();
    if len == 0 {
        return Err(LinalgError::ShapeMismatch {
            context,
            expected: 1,
            got: 0,
        });
    }
    if let Some(bad) = lines.iter().find(|line| line.len() != len) {
        return Err(LinalgError::ShapeMismatch {
            context,
            expected: len,
            got: bad.len(),
        });
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_dot() {
        let u = array![1.0_f64, 2.0, 3.0];
        let v = array![4.0_f64, 5.0, 6.0];
        let d = DenseOps.dot(u.view(), v.view()).unwrap();
        assert_relative_eq!(d, 32.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let u = array![1.0_f64, 2.0];
        let v = array![1.0_f64];
        assert!(DenseOps.dot(u.view(), v.view()).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_vector_norm() {
        let v = array![3.0_f64, 4.0];
        assert_relative_eq!(DenseOps.vector_norm(v.view()), 5.0);
    }

    #[test]
    fn test_transpose() {
        let m = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = DenseOps.transpose(&m);
        assert_eq!(t, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_matmul_matches_ndarray() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let b = array![[7.0_f64, 8.0, 9.0], [10.0, 11.0, 12.0]];
        let c = DenseOps.matmul(&a, &b).unwrap();
        assert_eq!(c, a.dot(&b));
    }

    #[test]
    fn test_matmul_inner_dimension() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let b = array![[1.0_f64, 2.0, 3.0]];
        let err = DenseOps.matmul(&a, &b).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                context: "matmul inner dimension",
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn test_matvec() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let x = array![1.0_f64, -1.0];
        assert_eq!(DenseOps.matvec(&a, &x).unwrap(), array![-1.0, -1.0]);
        assert!(DenseOps.matvec(&a, &array![1.0_f64]).is_err());
    }

    #[test]
    fn test_inverse() {
        let m = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = DenseOps.inverse(&m).unwrap();
        assert_relative_eq!(inv[[0, 0]], 0.6, epsilon = 1e-12);
        assert_relative_eq!(inv[[0, 1]], -0.7, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 0]], -0.2, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 1]], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_rejects_non_square_and_singular() {
        let rect = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            DenseOps.inverse(&rect).unwrap_err(),
            LinalgError::SingularMatrix
        );

        let singular = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert_eq!(
            DenseOps.inverse(&singular).unwrap_err(),
            LinalgError::SingularMatrix
        );
    }

    #[test]
    fn test_matrix_from_columns() {
        let m = matrix_from_columns(&[vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.dim(), (3, 2));
        assert_eq!(m, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_matrix_from_rows() {
        let m = matrix_from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m, array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    }

    #[test]
    fn test_ragged_input_is_rejected() {
        let err = matrix_from_columns(&[vec![1.0_f64, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                context: "column length",
                expected: 2,
                got: 1,
            }
        );

        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matrix_from_rows(&empty).unwrap_err().is_shape_error());
        assert!(matrix_from_rows(&[Vec::<f64>::new()]).is_err());
    }
}
