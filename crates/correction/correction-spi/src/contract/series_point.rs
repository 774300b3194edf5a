//! Series point trait definition.

use crate::model::EvolutionPoint;

/// A time-series element carrying a rewritable numeric value.
///
/// Filters only ever touch the value; every other field is carried over
/// unchanged.
pub trait SeriesPoint: Clone {
    /// The magnitude of this point.
    fn value(&self) -> f64;

    /// Overwrite the magnitude of this point.
    fn set_value(&mut self, value: f64);
}

impl SeriesPoint for EvolutionPoint {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl SeriesPoint for f64 {
    fn value(&self) -> f64 {
        *self
    }

    fn set_value(&mut self, value: f64) {
        *self = value;
    }
}

/// Copy `series` into a new vector with values taken from `values`.
///
/// `values` must be as long as `series`.
pub fn with_values<T: SeriesPoint>(series: &[T], values: &[f64]) -> Vec<T> {
    debug_assert_eq!(series.len(), values.len());
    series
        .iter()
        .zip(values)
        .map(|(point, &value)| {
            let mut point = point.clone();
            point.set_value(value);
            point
        })
        .collect()
}
