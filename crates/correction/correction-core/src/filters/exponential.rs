//! Forward-backward exponential smoothing.

use std::borrow::Cow;

use correction_spi::{SeriesFilter, SeriesPoint};

use super::{blend_interior, MIN_FILTER_LEN};

/// Zero-phase exponential smoothing.
///
/// Runs a causal pass (lags the trend) and an anti-causal pass (leads it)
/// with `alpha = 1 / (1 + tau)`, then blends them by position so the
/// phase shifts cancel and both endpoints stay fixed.
///
/// A time constant of 0 (or anything not strictly positive) disables the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoothing {
    tau: f64,
}

impl ExponentialSmoothing {
    /// Create a new filter with time constant `tau`; larger is smoother.
    pub fn new(tau: f64) -> Self {
        Self { tau }
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Smoothing coefficient derived from the time constant.
    pub fn alpha(&self) -> f64 {
        1.0 / (1.0 + self.tau)
    }

    /// Causal pass seeded with the first value.
    pub fn forward(&self, values: &[f64]) -> Vec<f64> {
        let alpha = self.alpha();
        let mut out = Vec::with_capacity(values.len());
        let mut level = match values.first() {
            Some(&first) => first,
            None => return out,
        };
        out.push(level);
        for &x in &values[1..] {
            level = alpha * x + (1.0 - alpha) * level;
            out.push(level);
        }
        out
    }

    /// Anti-causal pass seeded with the last value.
    pub fn backward(&self, values: &[f64]) -> Vec<f64> {
        let alpha = self.alpha();
        let n = values.len();
        let mut out = vec![0.0; n];
        let Some(&last) = values.last() else {
            return out;
        };
        out[n - 1] = last;
        for i in (0..n - 1).rev() {
            out[i] = alpha * values[i] + (1.0 - alpha) * out[i + 1];
        }
        out
    }
}

impl SeriesFilter for ExponentialSmoothing {
    fn filter_values(&self, values: &[f64]) -> Option<Vec<f64>> {
        if !self.is_enabled() || values.len() < MIN_FILTER_LEN {
            return None;
        }
        let forward = self.forward(values);
        let backward = self.backward(values);
        Some(blend_interior(values, &forward, &backward))
    }

    fn is_enabled(&self) -> bool {
        self.tau > 0.0
    }

    fn name(&self) -> &str {
        "exponential_smoothing"
    }
}

/// Apply forward-backward exponential smoothing with time constant `tau`.
///
/// Returns the input untouched when `tau <= 0` or the series has fewer than
/// three points.
pub fn smoothing<T: SeriesPoint>(series: &[T], tau: f64) -> Cow<'_, [T]> {
    ExponentialSmoothing::new(tau).apply(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_known_values() {
        let data = vec![0.0, 10.0, 20.0, 30.0, 100.0];
        let result = smoothing(&data, 1.0);
        assert_close(&result, &[0.0, 10.3125, 27.5, 54.0625, 100.0]);
    }

    #[test]
    fn test_alpha_from_tau() {
        assert!((ExponentialSmoothing::new(1.0).alpha() - 0.5).abs() < 1e-12);
        assert!((ExponentialSmoothing::new(3.0).alpha() - 0.25).abs() < 1e-12);
        assert_eq!(ExponentialSmoothing::new(3.0).tau(), 3.0);
    }

    #[test]
    fn test_passes() {
        let es = ExponentialSmoothing::new(1.0);
        let data = [0.0, 10.0, 20.0, 30.0, 100.0];
        assert_close(&es.forward(&data), &[0.0, 5.0, 12.5, 21.25, 60.625]);
        assert_close(&es.backward(&data), &[13.125, 26.25, 42.5, 65.0, 100.0]);
    }

    #[test]
    fn test_passes_on_empty_input() {
        let es = ExponentialSmoothing::new(1.0);
        assert!(es.forward(&[]).is_empty());
        assert!(es.backward(&[]).is_empty());
    }

    #[test]
    fn test_disabled_tau_borrows_input() {
        let data = vec![3.0, 9.0, 1.0, 4.0];
        assert!(matches!(smoothing(&data, 0.0), Cow::Borrowed(_)));
        assert!(matches!(smoothing(&data, -2.0), Cow::Borrowed(_)));
        assert!(matches!(smoothing(&data, f64::NAN), Cow::Borrowed(_)));
    }

    #[test]
    fn test_short_series_borrows_input() {
        let data = vec![3.0, 9.0];
        assert!(matches!(smoothing(&data, 4.0), Cow::Borrowed(_)));
    }

    #[test]
    fn test_heavier_tau_flattens_spike() {
        let data = vec![10.0, 10.0, 10.0, 100.0, 10.0, 10.0, 10.0];
        let light = smoothing(&data, 0.5);
        let heavy = smoothing(&data, 5.0);
        assert!(heavy[3] < light[3]);
        assert!(light[3] < 100.0);
    }
}
