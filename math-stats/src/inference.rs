//! Test statistics and a quick symmetry check.

use crate::descriptive::{mean, std_dev};
use crate::error::{Result, StatsError};
use crate::quantile::median;

/// One-sample t statistic, (μ₀ - x̄) / (s / √n).
pub fn t_value(pop_mean: f64, sample_mean: f64, sd: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(StatsError::InsufficientData { needed: 1, got: 0 });
    }
    if sd <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    let se = sd / (n as f64).sqrt();
    Ok((pop_mean - sample_mean) / se)
}

/// Two-sample t statistic with unpooled variances (Welch),
/// (m₁ - m₂) / √(s₁²/n₁ + s₂²/n₂).
///
/// # Examples
///
/// ```
/// use math_stats::welch_t;
///
/// let t = welch_t(10.0, 8.0, 2.0, 2.0, 8, 8).unwrap();
/// assert!((t - 2.0).abs() < 1e-12);
/// ```
pub fn welch_t(m1: f64, m2: f64, sd1: f64, sd2: f64, n1: usize, n2: usize) -> Result<f64> {
    if n1 == 0 || n2 == 0 {
        return Err(StatsError::InsufficientData {
            needed: 1,
            got: n1.min(n2),
        });
    }
    let se = (sd1 * sd1 / n1 as f64 + sd2 * sd2 / n2 as f64).sqrt();
    if se <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok((m1 - m2) / se)
}

/// Rule of thumb for symmetry: |mean - median| ≤ 3·sd / √n.
pub fn is_symmetric(mean: f64, median: f64, sd: f64, n: usize) -> bool {
    (mean - median).abs() <= 3.0 * sd / (n as f64).sqrt()
}

/// Apply [`is_symmetric`] to a sample, using its population standard deviation.
pub fn check_symmetry(data: &[f64]) -> Result<bool> {
    let m = mean(data, None)?;
    let h = median(data)?;
    let s = std_dev(data, None)?;
    let symmetric = is_symmetric(m, h, s, data.len());
    log::debug!(
        "symmetry check: mean={m:.4}, median={h:.4}, sd={s:.4}, n={} -> {symmetric}",
        data.len()
    );
    Ok(symmetric)
}
