//! Curated download anomaly records.

use serde::{Deserialize, Serialize};

/// One end of an anomaly window.
///
/// `weekly_downloads` is always expressed per week, whatever the
/// granularity of the series being corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyBound {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Plausible weekly download count at this date.
    pub weekly_downloads: u64,
}

impl AnomalyBound {
    /// Create a new bound.
    pub fn new(date: &str, weekly_downloads: u64) -> Self {
        Self {
            date: date.to_string(),
            weekly_downloads,
        }
    }
}

/// A known-contaminated date range for one package.
///
/// The bound dates themselves are real observations; only the points
/// strictly between them (or overlapping them at coarse granularities)
/// are replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAnomaly {
    /// Package the anomaly applies to, matched exactly.
    pub package_name: String,
    /// Last trusted observation before the anomaly.
    pub start: AnomalyBound,
    /// First trusted observation after the anomaly.
    pub end: AnomalyBound,
}

impl DownloadAnomaly {
    /// Create a new anomaly record.
    pub fn new(package_name: &str, start: AnomalyBound, end: AnomalyBound) -> Self {
        Self {
            package_name: package_name.to_string(),
            start,
            end,
        }
    }

    /// Date-only projection used by the chart layer for annotations.
    pub fn span(&self) -> AnomalySpan {
        AnomalySpan {
            package_name: self.package_name.clone(),
            start: self.start.date.clone(),
            end: self.end.date.clone(),
        }
    }
}

/// Date range of an anomaly without the magnitude bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalySpan {
    pub package_name: String,
    pub start: String,
    pub end: String,
}
