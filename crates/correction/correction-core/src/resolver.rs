//! Granularity-aware date keys, anomaly windows and weekly scaling.

use correction_spi::{DownloadAnomaly, EvolutionPoint, Granularity, Period};

/// Canonical `YYYY-MM-DD` key of a point at the given granularity.
///
/// Months map to their first day and years to January 1st. Returns `None`
/// when the point's date shape does not belong to `granularity`.
pub fn date_key(point: &EvolutionPoint, granularity: Granularity) -> Option<String> {
    let key = match (granularity, &point.period) {
        (Granularity::Daily, Period::Day { day }) => day.clone(),
        (Granularity::Weekly, Period::Week { week_start, .. }) => week_start.clone(),
        (Granularity::Monthly, Period::Month { month }) => format!("{month}-01"),
        (Granularity::Yearly, Period::Year { year }) => format!("{year}-01-01"),
        (
            Granularity::Daily | Granularity::Weekly | Granularity::Monthly | Granularity::Yearly,
            _,
        ) => return None,
    };
    Some(key)
}

/// Rescale a weekly download figure to one period of `granularity`.
pub fn scale_weekly(weekly_value: u64, granularity: Granularity) -> u64 {
    match granularity {
        Granularity::Weekly => weekly_value,
        Granularity::Daily | Granularity::Monthly | Granularity::Yearly => {
            let days = f64::from(granularity.days_per_period());
            (weekly_value as f64 / 7.0 * days).round() as u64
        }
    }
}

/// Whether a point keyed at `date` lies inside the anomaly window.
///
/// Daily and weekly points must fall strictly between the bounds; the bound
/// dates are trusted observations. Monthly and yearly points are matched
/// inclusively against bounds truncated to the same period, since any
/// period overlapping the window is contaminated.
pub fn is_affected(date: &str, anomaly: &DownloadAnomaly, granularity: Granularity) -> bool {
    match granularity {
        Granularity::Daily | Granularity::Weekly => {
            date > anomaly.start.date.as_str() && date < anomaly.end.date.as_str()
        }
        Granularity::Monthly => {
            let start = format!("{}-01", truncate(&anomaly.start.date, 7));
            let end = format!("{}-01", truncate(&anomaly.end.date, 7));
            date >= start.as_str() && date <= end.as_str()
        }
        Granularity::Yearly => {
            let start = format!("{}-01-01", truncate(&anomaly.start.date, 4));
            let end = format!("{}-01-01", truncate(&anomaly.end.date, 4));
            date >= start.as_str() && date <= end.as_str()
        }
    }
}

fn truncate(date: &str, len: usize) -> &str {
    date.get(..len).unwrap_or(date)
}
