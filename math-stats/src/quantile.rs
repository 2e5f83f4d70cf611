//! Percentiles with linear interpolation between order statistics.

use crate::error::{Result, StatsError, check_finite};

/// Value below which a fraction `percent` of the data lies.
///
/// The data is sorted and the rank `k = (n - 1) · percent` is interpolated
/// linearly between `sorted[floor(k)]` and `sorted[ceil(k)]`.
///
/// # Examples
///
/// ```
/// use math_stats::percentile;
///
/// let data = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&data, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&data, 0.5).unwrap(), 2.5);
/// assert_eq!(percentile(&data, 1.0).unwrap(), 4.0);
/// ```
pub fn percentile(data: &[f64], percent: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(StatsError::InvalidPercentile { percent });
    }
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    check_finite(data)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let k = (sorted.len() - 1) as f64 * percent;
    let f = k.floor();
    let c = k.ceil();
    if f == c {
        return Ok(sorted[f as usize]);
    }

    let d0 = sorted[f as usize] * (c - k);
    let d1 = sorted[c as usize] * (k - f);
    Ok(d0 + d1)
}

/// The 50th percentile.
pub fn median(data: &[f64]) -> Result<f64> {
    percentile(data, 0.5)
}

/// First quartile, median and third quartile.
pub fn quartiles(data: &[f64]) -> Result<(f64, f64, f64)> {
    Ok((
        percentile(data, 0.25)?,
        percentile(data, 0.5)?,
        percentile(data, 0.75)?,
    ))
}
