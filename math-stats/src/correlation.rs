//! Covariance and Pearson correlation.
//!
//! Two algebraically equivalent routes to Pearson's r are offered: from raw
//! moments, and from centered sums of squares. The second one is the better
//! conditioned of the two when the data sits far from zero.

use crate::descriptive::{mean, paired_product, squared};
use crate::error::{Result, StatsError, check_paired};

/// Which formula [`correlation`] evaluates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrelationFormula {
    /// r = (E[xy] - E[x]·E[y]) / √((E[x²] - E[x]²)·(E[y²] - E[y]²))
    #[default]
    Moments,
    /// r = Σ(xᵢ - x̄)(yᵢ - ȳ) / √(Σ(xᵢ - x̄)² · Σ(yᵢ - ȳ)²)
    SumOfSquares,
}

/// Sample covariance, Σ(xᵢ - x̄)(yᵢ - ȳ) / (n - 1).
///
/// # Examples
///
/// ```
/// use math_stats::covariance;
///
/// let cov = covariance(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((cov - 2.0).abs() < 1e-12);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;
    let n = x.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { needed: 2, got: n });
    }
    let x_mean = mean(x, None)?;
    let y_mean = mean(y, None)?;
    let deviations: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
        .collect();
    mean(&deviations, Some(n - 1))
}

/// Pearson correlation coefficient in [-1, 1].
///
/// Fails with [`StatsError::ZeroVariance`] when either input is constant.
pub fn correlation(x: &[f64], y: &[f64], formula: CorrelationFormula) -> Result<f64> {
    check_paired(x, y)?;
    let x_mean = mean(x, None)?;
    let y_mean = mean(y, None)?;

    let (num, den) = match formula {
        CorrelationFormula::Moments => {
            let xy = mean(&paired_product(x, y)?, None)?;
            let x_var = mean(&squared(x), None)? - x_mean * x_mean;
            let y_var = mean(&squared(y), None)? - y_mean * y_mean;
            (xy - x_mean * y_mean, (x_var * y_var).sqrt())
        }
        CorrelationFormula::SumOfSquares => {
            let mut cov = 0.0;
            let mut x_ss = 0.0;
            let mut y_ss = 0.0;
            for (xi, yi) in x.iter().zip(y) {
                let dx = xi - x_mean;
                let dy = yi - y_mean;
                cov += dx * dy;
                x_ss += dx * dx;
                y_ss += dy * dy;
            }
            (cov, (x_ss * y_ss).sqrt())
        }
    };

    // Moment-based variances can round to tiny negatives, hence the NaN check
    if den.is_nan() || den <= f64::MIN_POSITIVE {
        return Err(StatsError::ZeroVariance);
    }
    Ok((num / den).clamp(-1.0, 1.0))
}
