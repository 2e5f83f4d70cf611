//! Central moments and element-wise helpers.
//!
//! Every function takes an optional divisor: `None` divides by the number of
//! observations (population statistics), `Some(n - 1)` gives the unbiased
//! sample estimate.

use crate::error::{Result, StatsError, check_finite, check_paired};

fn divisor_or_len(data: &[f64], divisor: Option<usize>) -> Result<f64> {
    match divisor {
        Some(0) => Err(StatsError::InvalidDivisor),
        Some(d) => Ok(d as f64),
        None => Ok(data.len() as f64),
    }
}

/// Sum of `data` divided by `divisor` (default: its length).
///
/// # Examples
///
/// ```
/// use math_stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0], None).unwrap(), 2.5);
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0], Some(5)).unwrap(), 2.0);
/// ```
pub fn mean(data: &[f64], divisor: Option<usize>) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    check_finite(data)?;
    let d = divisor_or_len(data, divisor)?;
    Ok(data.iter().sum::<f64>() / d)
}

/// Variance: squared deviations from the arithmetic mean, divided by
/// `divisor` (default: the number of observations).
pub fn variance(data: &[f64], divisor: Option<usize>) -> Result<f64> {
    let center = mean(data, None)?;
    let d = divisor_or_len(data, divisor)?;
    let ss: f64 = data.iter().map(|x| (x - center).powi(2)).sum();
    Ok(ss / d)
}

/// Standard deviation, the square root of [`variance`].
pub fn std_dev(data: &[f64], divisor: Option<usize>) -> Result<f64> {
    Ok(variance(data, divisor)?.sqrt())
}

/// Standard error of the mean: sample standard deviation over √n.
pub fn standard_error(data: &[f64]) -> Result<f64> {
    let n = data.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { needed: 2, got: n });
    }
    let sd = std_dev(data, Some(n - 1))?;
    Ok(sd / (n as f64).sqrt())
}

/// Element-wise difference `a[i] - b[i]`.
pub fn paired_diff(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_paired(a, b)?;
    Ok(a.iter().zip(b).map(|(ai, bi)| ai - bi).collect())
}

/// Element-wise product `a[i] * b[i]`.
pub fn paired_product(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_paired(a, b)?;
    Ok(a.iter().zip(b).map(|(ai, bi)| ai * bi).collect())
}

/// Squares of every element.
pub fn squared(data: &[f64]) -> Vec<f64> {
    data.iter().map(|x| x * x).collect()
}
