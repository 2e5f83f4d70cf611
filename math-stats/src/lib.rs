//! Descriptive statistics on `f64` samples
//!
//! Small, dependency-light routines for summarizing data:
//!
//! - [`descriptive`]: mean, variance, standard deviation, standard error
//! - [`quantile`]: percentiles with linear interpolation, median, quartiles
//! - [`correlation`]: sample covariance and Pearson's r (two formulas)
//! - [`inference`]: one-sample and Welch t statistics, symmetry rule of thumb
//!
//! All functions validate their input (empty, non-finite, mismatched lengths)
//! and report problems through [`StatsError`].
//!
//! # Example
//!
//! ```
//! use math_stats::{mean, quartiles, std_dev};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data, None).unwrap(), 5.0);
//! assert_eq!(std_dev(&data, None).unwrap(), 2.0);
//! let (q25, q50, q75) = quartiles(&data).unwrap();
//! assert!(q25 <= q50 && q50 <= q75);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod error;
pub mod inference;
pub mod quantile;

pub use correlation::{CorrelationFormula, correlation, covariance};
pub use descriptive::{
    mean, paired_diff, paired_product, squared, standard_error, std_dev, variance,
};
pub use error::{Result, StatsError};
pub use inference::{check_symmetry, is_symmetric, t_value, welch_t};
pub use quantile::{median, percentile, quartiles};
