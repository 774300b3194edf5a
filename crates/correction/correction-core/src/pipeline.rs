//! Fixed-order smoothing pipeline.

use std::borrow::Cow;

use correction_api::FilterSettings;
use correction_spi::{with_values, SeriesFilter, SeriesPoint};

use crate::filters::{ExponentialSmoothing, MovingAverage};

/// Composable smoothing pipeline.
///
/// Steps run in insertion order on the output of the previous step. The
/// stages are not commutative, so [`CorrectionPipeline::from_settings`]
/// always runs the moving average before the exponential smoothing.
pub struct CorrectionPipeline {
    steps: Vec<Box<dyn SeriesFilter>>,
}

impl CorrectionPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Moving average with `average_window`, then smoothing with `smoothing_tau`.
    pub fn from_settings(settings: &FilterSettings) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_step(Box::new(MovingAverage::new(settings.average_window)));
        pipeline.add_step(Box::new(ExponentialSmoothing::new(settings.smoothing_tau)));
        pipeline
    }

    pub fn add_step(&mut self, step: Box<dyn SeriesFilter>) {
        self.steps.push(step);
    }

    /// Names of the steps, in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step; borrows the input if no step changed anything.
    pub fn apply<'a, T: SeriesPoint>(&self, series: &'a [T]) -> Cow<'a, [T]> {
        let values: Vec<f64> = series.iter().map(SeriesPoint::value).collect();
        let mut filtered: Option<Vec<f64>> = None;

        for step in &self.steps {
            let input = filtered.as_deref().unwrap_or(&values);
            match step.filter_values(input) {
                Some(next) => {
                    tracing::debug!(step = step.name(), points = next.len(), "applied filter");
                    filtered = Some(next);
                }
                None => {
                    tracing::debug!(step = step.name(), points = input.len(), "filter skipped");
                }
            }
        }

        match filtered {
            Some(values) => Cow::Owned(with_values(series, &values)),
            None => Cow::Borrowed(series),
        }
    }
}

impl Default for CorrectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the moving average then the exponential smoothing from `settings`.
pub fn apply_data_correction<'a, T: SeriesPoint>(
    series: &'a [T],
    settings: &FilterSettings,
) -> Cow<'a, [T]> {
    CorrectionPipeline::from_settings(settings).apply(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{moving_average, smoothing};

    #[test]
    fn test_step_order_is_fixed() {
        let pipeline = CorrectionPipeline::from_settings(&FilterSettings::new(1, 1.0));
        assert_eq!(
            pipeline.step_names(),
            vec!["moving_average", "exponential_smoothing"]
        );
    }

    #[test]
    fn test_matches_sequential_application() {
        let data = vec![0.0, 10.0, 20.0, 30.0, 100.0, 40.0, 50.0];
        let settings = FilterSettings::new(1, 1.0);

        let averaged = moving_average(&data, 1);
        let expected = smoothing(&averaged[..], 1.0).into_owned();
        let result = apply_data_correction(&data, &settings);

        assert_eq!(result.len(), expected.len());
        for (a, e) in result.iter().zip(&expected) {
            assert!((a - e).abs() < 1e-10);
        }
    }

    #[test]
    fn test_disabled_settings_borrow_input() {
        let data = vec![1.0, 2.0, 30.0, 4.0];
        let result = apply_data_correction(&data, &FilterSettings::default());
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_stage_equals_that_filter() {
        let data = vec![5.0, 1.0, 9.0, 2.0, 8.0];

        let only_average = apply_data_correction(&data, &FilterSettings::new(2, 0.0));
        assert_eq!(only_average.as_ref(), moving_average(&data, 2).as_ref());

        let only_smoothing = apply_data_correction(&data, &FilterSettings::new(0, 2.0));
        assert_eq!(only_smoothing.as_ref(), smoothing(&data, 2.0).as_ref());
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(matches!(CorrectionPipeline::default().apply(&data), Cow::Borrowed(_)));
    }
}
