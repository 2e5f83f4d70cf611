//! QR solver configuration

use crate::traits::RealField;

/// QR decomposition and solve configuration
#[derive(Debug, Clone)]
pub struct QrConfig<R> {
    /// Relative tolerance for rank detection: column `c` is degenerate when
    /// ‖U[c]‖ ≤ tolerance · ‖A[c]‖ after orthogonalization
    pub degeneracy_tolerance: R,
    /// Compute Qᵗ·Q after decomposition and warn when it drifts from identity
    pub check_orthonormality: bool,
    /// Largest accepted entry of |Qᵗ·Q - I| before warning
    pub orthonormality_tolerance: R,
    /// Intermediate matrices are logged at `info` when > 0, at `debug` otherwise
    pub verbosity: usize,
    /// Decimal places used when logging matrices
    pub precision: usize,
}

impl<R: RealField> Default for QrConfig<R> {
    fn default() -> Self {
        Self {
            degeneracy_tolerance: R::degeneracy_tolerance(),
            check_orthonormality: false,
            orthonormality_tolerance: R::orthonormality_tolerance(),
            verbosity: 0,
            precision: 4,
        }
    }
}

impl<R: RealField> QrConfig<R> {
    /// Log level used for the intermediate matrices
    pub(crate) fn report_level(&self) -> log::Level {
        if self.verbosity > 0 {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QrConfig::<f64>::default();
        assert_eq!(config.degeneracy_tolerance, 1e-10);
        assert!(!config.check_orthonormality);
        assert_eq!(config.precision, 4);
        assert_eq!(config.report_level(), log::Level::Debug);
    }

    #[test]
    fn test_verbose_config_reports_at_info() {
        let config = QrConfig::<f32> {
            verbosity: 1,
            ..Default::default()
        };
        assert_eq!(config.report_level(), log::Level::Info);
    }
}
