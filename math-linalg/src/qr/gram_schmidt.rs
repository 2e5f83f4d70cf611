//! Classical Gram-Schmidt orthonormalization
//!
//! Column `c` of the orthogonal basis is built from the *original* column A[c]:
//!
//! ```text
//! u1 = v1
//! u2 = v2 - proj_u1(v2)
//! un = vn - proj_u1(vn) - ... - proj_un-1(vn),   proj_u(v) = <v, u> / <u, u> · u
//! ```
//!
//! and each u is then scaled to unit length. The projections always use the
//! untouched input column, which is what separates the classical process from
//! the modified one used by GMRES. Classical Gram-Schmidt loses orthogonality
//! on ill-conditioned inputs; results on such inputs are reproduced as-is.

use crate::dense::DenseOps;
use crate::error::{LinalgError, Result};
use crate::qr::QrConfig;
use crate::traits::{LinearAlgebraOps, RealField};
use ndarray::{Array2, Axis};

/// Orthogonalize the columns of `a`.
///
/// Returns U with the same shape as `a`, pairwise orthogonal columns spanning
/// the same subspace. Fails with [`LinalgError::DegenerateInput`] as soon as a
/// column collapses, i.e. ⟨U[c], U[c]⟩ ≤ tol² · ⟨A[c], A[c]⟩.
pub fn orthogonalize<T, O>(ops: &O, a: &Array2<T>, config: &QrConfig<T>) -> Result<Array2<T>>
where
    T: RealField,
    O: LinearAlgebraOps<T>,
{
    let mut u = Array2::<T>::zeros(a.raw_dim());
    // ⟨U[p], U[p]⟩ for every finished column
    let mut divisors: Vec<T> = Vec::with_capacity(a.ncols());
    let tol_sqr = config.degeneracy_tolerance * config.degeneracy_tolerance;

    for c in 0..a.ncols() {
        let original = a.column(c);
        let mut current = original.to_owned();

        for (p, &divisor) in divisors.iter().enumerate() {
            let basis = u.column(p);
            let proj = ops.dot(original, basis)? / divisor;
            for (x, &b) in current.iter_mut().zip(basis.iter()) {
                *x -= proj * b;
            }
        }

        let norm_sqr = ops.dot(current.view(), current.view())?;
        let reference = ops.dot(original, original)?;
        if norm_sqr == T::zero() || norm_sqr.is_nan() || norm_sqr <= tol_sqr * reference {
            log::debug!(
                "Gram-Schmidt: column {} collapsed (|u|^2 = {:e}, |a|^2 = {:e})",
                c,
                norm_sqr.to_f64().unwrap_or(f64::NAN),
                reference.to_f64().unwrap_or(f64::NAN)
            );
            return Err(LinalgError::DegenerateInput { column: c });
        }

        u.column_mut(c).assign(&current);
        divisors.push(norm_sqr);
    }

    Ok(u)
}

/// Scale every column of `u` to unit Euclidean norm.
///
/// Fails with [`LinalgError::DegenerateInput`] on a zero-length column.
pub fn normalize<T, O>(ops: &O, u: &Array2<T>) -> Result<Array2<T>>
where
    T: RealField,
    O: LinearAlgebraOps<T>,
{
    let mut q = u.clone();

    for (c, mut column) in q.axis_iter_mut(Axis(1)).enumerate() {
        let length = ops.vector_norm(column.view());
        if length.is_nan() || length <= T::zero() {
            return Err(LinalgError::DegenerateInput { column: c });
        }
        column.mapv_inplace(|x| x / length);
    }

    Ok(q)
}

/// Orthonormal basis Q of the column space of `a`, using the given backend.
pub fn gram_schmidt_orthonormalize_with<T, O>(
    ops: &O,
    a: &Array2<T>,
    config: &QrConfig<T>,
) -> Result<Array2<T>>
where
    T: RealField,
    O: LinearAlgebraOps<T>,
{
    let u = orthogonalize(ops, a, config)?;
    normalize(ops, &u)
}

/// Orthonormal basis Q of the column space of `a`.
///
/// Q has the shape of `a` and satisfies Qᵗ·Q = I up to rounding.
///
/// # Example
///
/// ```
/// use math_linalg::gram_schmidt_orthonormalize;
/// use ndarray::array;
///
/// let a = array![[3.0_f64, 1.0], [4.0, 2.0]];
/// let q = gram_schmidt_orthonormalize(&a).unwrap();
/// assert!((q[[0, 0]] - 0.6).abs() < 1e-12);
/// assert!((q[[1, 0]] - 0.8).abs() < 1e-12);
/// ```
pub fn gram_schmidt_orthonormalize<T: RealField>(a: &Array2<T>) -> Result<Array2<T>> {
    gram_schmidt_orthonormalize_with(&DenseOps, a, &QrConfig::default())
}
