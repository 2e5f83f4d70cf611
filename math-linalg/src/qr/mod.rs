//! QR decomposition by classical Gram-Schmidt and the QR-based solver
//!
//! - [`orthogonalize`] / [`normalize`]: the two halves of Gram-Schmidt
//! - [`qr_decompose`]: A = Q·R with R = Qᵗ·A
//! - [`solve_linear_system`]: x = R⁻¹·Qᵗ·b for an augmented matrix `[A | b]`

mod config;
mod decompose;
mod gram_schmidt;
mod solve;

pub use config::QrConfig;
pub use decompose::{QrDecomposition, qr_decompose, qr_decompose_with};
pub use gram_schmidt::{
    gram_schmidt_orthonormalize, gram_schmidt_orthonormalize_with, normalize, orthogonalize,
};
pub use solve::{solve_columns, solve_linear_system, solve_linear_system_with};
