//! Smoothing pipeline settings.

use correction_spi::{CorrectionError, Result};
use serde::{Deserialize, Serialize};

/// Chart filter settings.
///
/// Zero disables a stage: `average_window == 0` skips the moving average,
/// `smoothing_tau <= 0` skips the exponential smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSettings {
    /// Half-window radius of the bidirectional moving average.
    pub average_window: usize,
    /// Time constant of the forward-backward exponential smoothing.
    pub smoothing_tau: f64,
}

impl FilterSettings {
    pub fn new(average_window: usize, smoothing_tau: f64) -> Self {
        Self {
            average_window,
            smoothing_tau,
        }
    }

    /// Set the moving average half-window.
    pub fn with_average_window(mut self, average_window: usize) -> Self {
        self.average_window = average_window;
        self
    }

    /// Set the smoothing time constant.
    pub fn with_smoothing_tau(mut self, smoothing_tau: f64) -> Self {
        self.smoothing_tau = smoothing_tau;
        self
    }

    /// True when both stages are disabled.
    pub fn is_identity(&self) -> bool {
        self.average_window == 0 && !(self.smoothing_tau > 0.0)
    }

    /// Reject settings that cannot come from a sane config source.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing_tau.is_finite() {
            return Err(CorrectionError::InvalidParameter {
                name: "smoothingTau".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if self.smoothing_tau < 0.0 {
            return Err(CorrectionError::InvalidParameter {
                name: "smoothingTau".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let settings = FilterSettings::default();
        assert_eq!(settings.average_window, 0);
        assert_eq!(settings.smoothing_tau, 0.0);
        assert!(settings.is_identity());
    }

    #[test]
    fn test_builders() {
        let settings = FilterSettings::default()
            .with_average_window(2)
            .with_smoothing_tau(1.5);
        assert_eq!(settings, FilterSettings::new(2, 1.5));
        assert!(!settings.is_identity());
    }

    #[test]
    fn test_validate() {
        assert!(FilterSettings::new(3, 0.0).validate().is_ok());
        assert!(FilterSettings::new(0, 2.0).validate().is_ok());
        assert!(FilterSettings::new(0, -1.0).validate().is_err());
        assert!(FilterSettings::new(0, f64::NAN).validate().is_err());
        assert!(FilterSettings::new(0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_json_camel_case_with_defaults() {
        let settings: FilterSettings =
            serde_json::from_str(r#"{"averageWindow": 2, "smoothingTau": 0.5}"#).unwrap();
        assert_eq!(settings, FilterSettings::new(2, 0.5));

        let partial: FilterSettings = serde_json::from_str(r#"{"averageWindow": 4}"#).unwrap();
        assert_eq!(partial, FilterSettings::new(4, 0.0));
    }
}
