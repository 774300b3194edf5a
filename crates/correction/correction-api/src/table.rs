//! The curated table of known download anomalies.

use std::path::Path;

use chrono::NaiveDate;
use correction_spi::{AnomalyBound, AnomalySpan, CorrectionError, DownloadAnomaly, Result};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only list of known download anomalies.
///
/// Built once (from [`AnomalyTable::builtin`] or a JSON file) and handed to
/// the corrector by reference. Every record is validated on the way in:
/// a non-empty package name, well-formed `YYYY-MM-DD` bounds and
/// `start.date < end.date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnomalyTable {
    anomalies: Vec<DownloadAnomaly>,
}

impl AnomalyTable {
    /// Build a table from records, validating each one.
    pub fn new(anomalies: Vec<DownloadAnomaly>) -> Result<Self> {
        for anomaly in &anomalies {
            validate(anomaly)?;
        }
        Ok(Self { anomalies })
    }

    /// The table shipped with the application.
    pub fn builtin() -> Self {
        Self {
            anomalies: vec![
                // vite rogue CI spike
                DownloadAnomaly::new(
                    "vite",
                    AnomalyBound::new("2025-08-04", 33_913_132),
                    AnomalyBound::new("2025-09-08", 38_665_727),
                ),
            ],
        }
    }

    /// Parse a JSON array of `{packageName, start, end}` records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let anomalies: Vec<DownloadAnomaly> =
            serde_json::from_str(json).map_err(|e| CorrectionError::Parse(e.to_string()))?;
        Self::new(anomalies)
    }

    /// Load a JSON table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CorrectionError::Io(format!("{}: {}", path.display(), e)))?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), anomalies = table.len(), "loaded anomaly table");
        Ok(table)
    }

    /// Append a record. Existing records are never modified.
    pub fn push(&mut self, anomaly: DownloadAnomaly) -> Result<()> {
        validate(&anomaly)?;
        self.anomalies.push(anomaly);
        Ok(())
    }

    /// Append every record of another table.
    pub fn extend(&mut self, other: AnomalyTable) {
        self.anomalies.extend(other.anomalies);
    }

    /// All records for `package_name`, in table order.
    pub fn for_package<'a>(
        &'a self,
        package_name: &'a str,
    ) -> impl Iterator<Item = &'a DownloadAnomaly> + 'a {
        self.anomalies
            .iter()
            .filter(move |a| a.package_name == package_name)
    }

    /// Date ranges of every record whose package is in `package_names`.
    pub fn spans_for_packages<S: AsRef<str>>(&self, package_names: &[S]) -> Vec<AnomalySpan> {
        self.anomalies
            .iter()
            .filter(|a| package_names.iter().any(|n| n.as_ref() == a.package_name))
            .map(DownloadAnomaly::span)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DownloadAnomaly> {
        self.anomalies.iter()
    }

    pub fn len(&self) -> usize {
        self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    // Bounds are compared as strings, so require the zero-padded form.
    if value.len() != 10 {
        return Err(CorrectionError::InvalidDate {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CorrectionError::InvalidDate {
        value: value.to_string(),
    })
}

fn validate(anomaly: &DownloadAnomaly) -> Result<()> {
    if anomaly.package_name.trim().is_empty() {
        return Err(CorrectionError::InvalidAnomaly {
            package_name: anomaly.package_name.clone(),
            reason: "package name must not be empty".to_string(),
        });
    }
    let start = parse_date(&anomaly.start.date)?;
    let end = parse_date(&anomaly.end.date)?;
    if start >= end {
        return Err(CorrectionError::InvalidAnomaly {
            package_name: anomaly.package_name.clone(),
            reason: format!(
                "start date {} must precede end date {}",
                anomaly.start.date, anomaly.end.date
            ),
        });
    }
    Ok(())
}
