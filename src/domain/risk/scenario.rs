//! Risk scenario input record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::IssueId;

/// Name given to scenarios submitted without one.
pub const DEFAULT_SCENARIO_NAME: &str = "scenario";

/// A possible future state with its likelihood and effect on each issue.
///
/// Probabilities are raw weights; they are normalized across the scenario
/// set before use. Impacts are utility deltas in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScenario {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub impacts: BTreeMap<IssueId, f64>,
}

fn default_name() -> String {
    DEFAULT_SCENARIO_NAME.to_string()
}

impl RiskScenario {
    /// Creates a scenario with no impacts.
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
            impacts: BTreeMap::new(),
        }
    }

    /// Adds an impact on one issue.
    pub fn with_impact(mut self, issue_id: impl Into<IssueId>, impact: f64) -> Self {
        self.impacts.insert(issue_id.into(), impact);
        self
    }

    /// Probability with negatives clamped to zero.
    pub fn clamped_probability(&self) -> f64 {
        self.probability.max(0.0)
    }

    /// Impact on an issue, clamped to `[-1, 1]`. Unspecified issues have no impact.
    pub fn impact_on(&self, issue_id: &IssueId) -> f64 {
        self.impacts
            .get(issue_id)
            .map(|impact| impact.clamp(-1.0, 1.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_probability_is_clamped() {
        assert_eq!(RiskScenario::new("adverse", -0.3).clamped_probability(), 0.0);
        assert_eq!(RiskScenario::new("baseline", 0.4).clamped_probability(), 0.4);
    }

    #[test]
    fn impacts_are_clamped_and_default_to_zero() {
        let scenario = RiskScenario::new("adverse", 0.2)
            .with_impact("price", -1.7)
            .with_impact("term", 0.25);

        assert_eq!(scenario.impact_on(&IssueId::from("price")), -1.0);
        assert_eq!(scenario.impact_on(&IssueId::from("term")), 0.25);
        assert_eq!(scenario.impact_on(&IssueId::from("volume")), 0.0);
    }

    #[test]
    fn deserializes_with_defaults() {
        let scenario: RiskScenario = serde_json::from_str("{}").unwrap();
        assert_eq!(scenario.name, DEFAULT_SCENARIO_NAME);
        assert_eq!(scenario.probability, 0.0);
        assert!(scenario.impacts.is_empty());
    }
}
