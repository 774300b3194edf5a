//! Time granularity of a download series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CorrectionError;

/// Time-bucketing resolution of a download series.
///
/// Determines which date field a point carries, how dates are compared
/// against anomaly bounds, and how weekly figures are rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One point per calendar day.
    Daily,
    /// One point per week, keyed by the week start.
    Weekly,
    /// One point per calendar month.
    Monthly,
    /// One point per calendar year.
    Yearly,
}

impl Granularity {
    /// Every granularity, finest first.
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// Lowercase name used on the wire and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Nominal period length in days, used to rescale weekly figures.
    pub fn days_per_period(&self) -> u32 {
        match self {
            Granularity::Daily => 1,
            Granularity::Weekly => 7,
            Granularity::Monthly => 30,
            Granularity::Yearly => 365,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = CorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            other => Err(CorrectionError::InvalidParameter {
                name: "granularity".to_string(),
                reason: format!("unknown granularity '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_per_period() {
        assert_eq!(Granularity::Daily.days_per_period(), 1);
        assert_eq!(Granularity::Weekly.days_per_period(), 7);
        assert_eq!(Granularity::Monthly.days_per_period(), 30);
        assert_eq!(Granularity::Yearly.days_per_period(), 365);
    }

    #[test]
    fn test_display_matches_from_str() {
        for granularity in Granularity::ALL {
            let parsed: Granularity = granularity.to_string().parse().unwrap();
            assert_eq!(parsed, granularity);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Weekly".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!(" YEARLY ".parse::<Granularity>().unwrap(), Granularity::Yearly);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "hourly".parse::<Granularity>().unwrap_err();
        assert!(matches!(
            err,
            CorrectionError::InvalidParameter { ref name, .. } if name == "granularity"
        ));
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Granularity::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");

        let granularity: Granularity = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(granularity, Granularity::Daily);
    }
}
