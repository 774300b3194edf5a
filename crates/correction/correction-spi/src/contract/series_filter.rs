//! Series filter trait definition.

use std::borrow::Cow;

use super::series_point::{with_values, SeriesPoint};

/// A smoothing stage over a fully materialized series.
///
/// Implementations pin the first and last value and return `None` whenever
/// they would be a no-op, so callers can hand the input back untouched.
pub trait SeriesFilter: Send + Sync {
    /// Filter raw values, or `None` if this filter leaves them unchanged.
    fn filter_values(&self, values: &[f64]) -> Option<Vec<f64>>;

    /// Whether the filter's parameter enables it at all.
    fn is_enabled(&self) -> bool;

    /// Name of this filter
    fn name(&self) -> &str;

    /// Filter a series of points, borrowing the input on the no-op path.
    fn apply<'a, T: SeriesPoint>(&self, series: &'a [T]) -> Cow<'a, [T]>
    where
        Self: Sized,
    {
        let values: Vec<f64> = series.iter().map(SeriesPoint::value).collect();
        match self.filter_values(&values) {
            Some(filtered) => Cow::Owned(with_values(series, &filtered)),
            None => Cow::Borrowed(series),
        }
    }
}
