//! Bidirectional moving average.

use std::borrow::Cow;

use correction_spi::{SeriesFilter, SeriesPoint};

use super::{blend_interior, MIN_FILTER_LEN};

/// Bidirectional moving average.
///
/// Averages a trailing window `[i - h, i]` and a leading window `[i, i + h]`
/// (both clipped to the series) and blends them by position: mostly trailing
/// near the start, mostly leading near the end. First and last points are
/// preserved.
///
/// A half-window of 0 disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    half_window: usize,
}

impl MovingAverage {
    /// Create a new filter with the given half-window radius.
    pub fn new(half_window: usize) -> Self {
        Self { half_window }
    }

    pub fn half_window(&self) -> usize {
        self.half_window
    }

    /// Mean of `[max(0, i - h), i]` for every `i`.
    pub fn trailing(&self, values: &[f64]) -> Vec<f64> {
        (0..values.len())
            .map(|i| {
                let lo = i.saturating_sub(self.half_window);
                mean(&values[lo..=i])
            })
            .collect()
    }

    /// Mean of `[i, min(n - 1, i + h)]` for every `i`.
    pub fn leading(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        (0..n)
            .map(|i| {
                let hi = i.saturating_add(self.half_window).min(n - 1);
                mean(&values[i..=hi])
            })
            .collect()
    }
}

impl SeriesFilter for MovingAverage {
    fn filter_values(&self, values: &[f64]) -> Option<Vec<f64>> {
        if !self.is_enabled() || values.len() < MIN_FILTER_LEN {
            return None;
        }
        let trailing = self.trailing(values);
        let leading = self.leading(values);
        Some(blend_interior(values, &trailing, &leading))
    }

    fn is_enabled(&self) -> bool {
        self.half_window > 0
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Apply a bidirectional moving average with the given half-window.
///
/// Returns the input untouched when `half_window == 0` or the series has
/// fewer than three points.
pub fn moving_average<T: SeriesPoint>(series: &[T], half_window: usize) -> Cow<'_, [T]> {
    MovingAverage::new(half_window).apply(series)
}
