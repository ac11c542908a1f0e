//! Aggregate scoring methods for ranking bundles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lower bound applied to each utility in the Nash product.
pub const NASH_UTILITY_FLOOR: f64 = 1e-6;

/// How party utilities collapse into one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMethod {
    /// Product of utilities, each floored at [`NASH_UTILITY_FLOOR`].
    #[default]
    Nash,
    /// Negative squared deviation from the mean utility.
    ///
    /// NOTE: this is an equal-gains approximation, not the Kalai-Smorodinsky
    /// bargaining solution. Consumers rank on this exact formula, so the name
    /// is kept; the mismatch is raised with product owners.
    Kalai,
    /// Weighted social welfare: sum of utilities.
    Wsw,
}

impl AggregationMethod {
    /// Scores one bundle from its per-party utilities.
    ///
    /// # Edge Cases
    /// - No parties: nash = 1, kalai = 0, wsw = 0
    pub fn score(&self, utilities: &[f64]) -> f64 {
        match self {
            AggregationMethod::Nash => utilities
                .iter()
                .map(|u| u.max(NASH_UTILITY_FLOOR))
                .product(),
            AggregationMethod::Kalai => {
                let mean = utilities.iter().sum::<f64>() / utilities.len().max(1) as f64;
                -utilities.iter().map(|u| (u - mean).powi(2)).sum::<f64>()
            }
            AggregationMethod::Wsw => utilities.iter().sum(),
        }
    }

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMethod::Nash => "nash",
            AggregationMethod::Kalai => "kalai",
            AggregationMethod::Wsw => "wsw",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AggregationMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nash" => Ok(AggregationMethod::Nash),
            "kalai" => Ok(AggregationMethod::Kalai),
            "wsw" => Ok(AggregationMethod::Wsw),
            other => Err(ValidationError::invalid_format(
                "method",
                format!("unknown aggregation method '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nash_floors_zero_utilities() {
        let score = AggregationMethod::Nash.score(&[0.0, 0.5]);
        assert!((score - 0.5e-6).abs() < 1e-15);
    }

    #[test]
    fn nash_is_product() {
        assert!((AggregationMethod::Nash.score(&[0.5, 0.4]) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn kalai_prefers_equal_utilities() {
        let equal = AggregationMethod::Kalai.score(&[0.5, 0.5]);
        let unequal = AggregationMethod::Kalai.score(&[0.9, 0.1]);
        assert_eq!(equal, 0.0);
        assert!(unequal < equal);
        assert!((unequal + 0.32).abs() < 1e-12);
    }

    #[test]
    fn wsw_is_sum() {
        assert!((AggregationMethod::Wsw.score(&[0.3, 0.6]) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn empty_party_list_scores() {
        assert_eq!(AggregationMethod::Nash.score(&[]), 1.0);
        assert_eq!(AggregationMethod::Kalai.score(&[]), 0.0);
        assert_eq!(AggregationMethod::Wsw.score(&[]), 0.0);
    }

    #[test]
    fn parses_known_methods() {
        assert_eq!("nash".parse::<AggregationMethod>().unwrap(), AggregationMethod::Nash);
        assert_eq!("KALAI".parse::<AggregationMethod>().unwrap(), AggregationMethod::Kalai);
        assert_eq!(" wsw ".parse::<AggregationMethod>().unwrap(), AggregationMethod::Wsw);
        assert!("utilitarian".parse::<AggregationMethod>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AggregationMethod::Wsw).unwrap(), "\"wsw\"");
        let m: AggregationMethod = serde_json::from_str("\"kalai\"").unwrap();
        assert_eq!(m, AggregationMethod::Kalai);
    }
}
