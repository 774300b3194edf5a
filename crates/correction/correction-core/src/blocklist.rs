//! Known-anomaly correction by linear interpolation.

use std::borrow::Cow;

use correction_api::AnomalyTable;
use correction_spi::{AnomalySpan, DownloadAnomaly, EvolutionPoint, Granularity};

use crate::resolver::{date_key, is_affected, scale_weekly};

/// Replaces points inside curated anomaly windows with interpolated values.
///
/// For each matching anomaly the affected points are redrawn on the
/// straight line between the nearest untouched neighbours. At a series edge
/// the missing neighbour is replaced by the anomaly bound's weekly figure,
/// rescaled to the series granularity.
///
/// Anomalies for the same package are applied one after another: a later
/// anomaly sees values corrected by an earlier one as real neighbours.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyCorrector<'t> {
    table: &'t AnomalyTable,
}

impl<'t> AnomalyCorrector<'t> {
    pub fn new(table: &'t AnomalyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t AnomalyTable {
        self.table
    }

    /// Correct `series` for `package_name`.
    ///
    /// Borrows the input when the package has no anomalies or none of its
    /// windows covers a point.
    pub fn correct<'a>(
        &self,
        series: &'a [EvolutionPoint],
        package_name: &str,
        granularity: Granularity,
    ) -> Cow<'a, [EvolutionPoint]> {
        let mut corrected: Option<Vec<EvolutionPoint>> = None;

        for anomaly in self.table.for_package(package_name) {
            let current = corrected.as_deref().unwrap_or(series);
            let affected = affected_indices(current, anomaly, granularity);
            if affected.is_empty() {
                tracing::trace!(
                    package = package_name,
                    start = %anomaly.start.date,
                    end = %anomaly.end.date,
                    "anomaly window covers no points"
                );
                continue;
            }

            let points = corrected.get_or_insert_with(|| series.to_vec());
            interpolate(points, &affected, anomaly, granularity);
        }

        match corrected {
            Some(points) => Cow::Owned(points),
            None => Cow::Borrowed(series),
        }
    }

    /// Date ranges of every anomaly recorded for `package_names`.
    pub fn spans_for_packages<S: AsRef<str>>(&self, package_names: &[S]) -> Vec<AnomalySpan> {
        self.table.spans_for_packages(package_names)
    }
}

/// Indices of points inside the anomaly window, in series order.
fn affected_indices(
    points: &[EvolutionPoint],
    anomaly: &DownloadAnomaly,
    granularity: Granularity,
) -> Vec<usize> {
    let mut mismatched = 0usize;
    let affected: Vec<usize> = points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| match date_key(point, granularity) {
            Some(date) => is_affected(&date, anomaly, granularity).then_some(i),
            None => {
                mismatched += 1;
                None
            }
        })
        .collect();

    if mismatched > 0 {
        tracing::warn!(
            package = %anomaly.package_name,
            %granularity,
            mismatched,
            "points with a date shape not matching the granularity were skipped"
        );
    }
    affected
}

fn interpolate(
    points: &mut [EvolutionPoint],
    affected: &[usize],
    anomaly: &DownloadAnomaly,
    granularity: Granularity,
) {
    let (Some(&first), Some(&last)) = (affected.first(), affected.last()) else {
        return;
    };

    let start_value = match first.checked_sub(1) {
        Some(before) => points[before].value,
        None => scale_weekly(anomaly.start.weekly_downloads, granularity) as f64,
    };
    let end_value = match points.get(last + 1) {
        Some(after) => after.value,
        None => scale_weekly(anomaly.end.weekly_downloads, granularity) as f64,
    };

    let count = affected.len();
    for (k, &index) in affected.iter().enumerate() {
        let t = (k + 1) as f64 / (count + 1) as f64;
        points[index].value = (start_value + t * (end_value - start_value)).round();
        tracing::trace!(index, value = points[index].value, "replaced anomalous point");
    }

    tracing::debug!(
        package = %anomaly.package_name,
        %granularity,
        affected = count,
        start_value,
        end_value,
        "corrected download anomaly"
    );
}

/// Correct `series` for `package_name` against `table`.
pub fn apply_blocklist_correction<'a>(
    table: &AnomalyTable,
    series: &'a [EvolutionPoint],
    package_name: &str,
    granularity: Granularity,
) -> Cow<'a, [EvolutionPoint]> {
    AnomalyCorrector::new(table).correct(series, package_name, granularity)
}

/// Date ranges in `table` for any of `package_names`; no correction is done.
pub fn anomalies_for_packages<S: AsRef<str>>(
    table: &AnomalyTable,
    package_names: &[S],
) -> Vec<AnomalySpan> {
    table.spans_for_packages(package_names)
}
