//! LU decomposition solver
//!
//! LU factorization with partial pivoting for dense square systems. The QR solver
//! only needs it to invert the triangular factor R, one unit column at a time.

use crate::error::{LinalgError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores L and U factors along with the row permutation
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<T>,
    /// Row `i` of the factored matrix is row `pivots[i]` of the input
    pub pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl<T: RealField> LuFactorization<T> {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        if b.len() != self.n {
            return Err(LinalgError::ShapeMismatch {
                context: "LU right-hand side length",
                expected: self.n,
                got: b.len(),
            });
        }

        // y = Pb
        let mut x = Array1::from_shape_fn(self.n, |i| b[self.pivots[i]]);

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                let x_j = x[j];
                x[i] -= l_ij * x_j;
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                let x_j = x[j];
                x[i] -= u_ij * x_j;
            }
            let u_ii = self.lu[[i, i]];
            if u_ii.abs() < T::pivot_tolerance() {
                return Err(LinalgError::SingularMatrix);
            }
            x[i] /= u_ii;
        }

        Ok(x)
    }

    /// Inverse of the factored matrix, built column by column from unit vectors
    pub fn inverse(&self) -> Result<Array2<T>> {
        let mut inv = Array2::<T>::zeros((self.n, self.n));
        let mut unit = Array1::<T>::zeros(self.n);

        for j in 0..self.n {
            unit[j] = T::one();
            let column = self.solve(&unit)?;
            inv.column_mut(j).assign(&column);
            unit[j] = T::zero();
        }

        Ok(inv)
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LinalgError::ShapeMismatch {
            context: "LU requires a square matrix",
            expected: n,
            got: a.ncols(),
        });
    }

    let mut lu = a.clone();
    let mut pivots: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        // NaN pivots compare false above, so test explicitly
        if max_val.is_nan() || max_val < T::pivot_tolerance() {
            return Err(LinalgError::SingularMatrix);
        }

        if max_row != k {
            for j in 0..n {
                lu.swap([k, j], [max_row, j]);
            }
            pivots.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization { lu, pivots, n })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}
