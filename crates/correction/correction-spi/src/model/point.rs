//! Download series point types.

use serde::{Deserialize, Serialize};

use super::Granularity;

/// The date a point is bucketed under.
///
/// Exactly one shape per granularity, matching the charting layer's JSON:
/// `day`, `weekStart`/`weekEnd`, `month` (`YYYY-MM`) or `year` (`YYYY`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    /// A calendar day, `YYYY-MM-DD`.
    Day { day: String },
    /// A week, keyed by its first day.
    Week {
        #[serde(rename = "weekStart")]
        week_start: String,
        #[serde(rename = "weekEnd", default, skip_serializing_if = "Option::is_none")]
        week_end: Option<String>,
    },
    /// A calendar month, `YYYY-MM`.
    Month { month: String },
    /// A calendar year, `YYYY`.
    Year { year: String },
}

impl Period {
    /// Granularity this date shape belongs to.
    pub fn granularity(&self) -> Granularity {
        match self {
            Period::Day { .. } => Granularity::Daily,
            Period::Week { .. } => Granularity::Weekly,
            Period::Month { .. } => Granularity::Monthly,
            Period::Year { .. } => Granularity::Yearly,
        }
    }

    /// The raw date string as supplied by the data source.
    pub fn label(&self) -> &str {
        match self {
            Period::Day { day } => day,
            Period::Week { week_start, .. } => week_start,
            Period::Month { month } => month,
            Period::Year { year } => year,
        }
    }
}

/// One observation of a download series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    /// Date bucket of the observation.
    #[serde(flatten)]
    pub period: Period,
    /// Download count (fractional once smoothed).
    pub value: f64,
}

impl EvolutionPoint {
    /// Create a point from a period and a value.
    pub fn new(period: Period, value: f64) -> Self {
        Self { period, value }
    }

    /// Create a daily point.
    pub fn daily(day: &str, value: f64) -> Self {
        Self::new(Period::Day { day: day.to_string() }, value)
    }

    /// Create a weekly point keyed by its week start.
    pub fn weekly(week_start: &str, value: f64) -> Self {
        Self::new(
            Period::Week {
                week_start: week_start.to_string(),
                week_end: None,
            },
            value,
        )
    }

    /// Create a monthly point from a `YYYY-MM` string.
    pub fn monthly(month: &str, value: f64) -> Self {
        Self::new(Period::Month { month: month.to_string() }, value)
    }

    /// Create a yearly point from a `YYYY` string.
    pub fn yearly(year: &str, value: f64) -> Self {
        Self::new(Period::Year { year: year.to_string() }, value)
    }

    /// Granularity of this point's date.
    pub fn granularity(&self) -> Granularity {
        self.period.granularity()
    }
}
