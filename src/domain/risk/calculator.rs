//! Risk Calculator - Expected impact and overall risk index.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::RiskScenario;
use crate::domain::foundation::{ensure_finite, EngineError, IssueId};
use crate::domain::negotiation::Issue;

/// Input for a risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRequest {
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub scenarios: Vec<RiskScenario>,
}

/// One scenario's share of an issue's expected impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioContribution {
    pub scenario: String,
    /// Normalized probability.
    pub probability: f64,
    pub impact: f64,
    /// `probability * impact`.
    pub contribution: f64,
}

/// Probability-weighted impact on one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedImpact {
    pub issue_id: IssueId,
    pub expected_impact: f64,
    pub scenarios: Vec<ScenarioContribution>,
}

impl ExpectedImpact {
    /// Absolute size of the expected impact.
    pub fn magnitude(&self) -> f64 {
        self.expected_impact.abs()
    }
}

/// Expected impacts for all issues plus the overall index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub issues: Vec<ExpectedImpact>,
    /// Mean absolute expected impact across issues.
    pub overall_risk_index: f64,
}

impl RiskAssessment {
    /// Expected impact for one issue.
    pub fn impact_for(&self, issue_id: &IssueId) -> Option<&ExpectedImpact> {
        self.issues.iter().find(|impact| &impact.issue_id == issue_id)
    }

    /// Issues ordered by absolute expected impact, largest first.
    ///
    /// Ties keep input order.
    pub fn ranked_by_magnitude(&self) -> Vec<&ExpectedImpact> {
        let mut ranked: Vec<_> = self.issues.iter().collect();
        ranked.sort_by(|a, b| {
            b.magnitude()
                .partial_cmp(&a.magnitude())
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// Issues whose absolute expected impact meets `threshold`.
    pub fn issues_at_or_above(&self, threshold: f64) -> Vec<&ExpectedImpact> {
        self.issues
            .iter()
            .filter(|impact| impact.magnitude() >= threshold)
            .collect()
    }
}

/// Calculator for scenario-weighted issue impacts.
pub struct RiskCalculator;

impl RiskCalculator {
    /// Normalizes raw scenario probabilities.
    ///
    /// Negative probabilities count as zero. The divisor is floored at 1.0
    /// when every probability is zero, so the result is all zeros rather
    /// than a redistribution.
    pub fn normalized_probabilities(scenarios: &[RiskScenario]) -> Vec<f64> {
        let clamped: Vec<f64> = scenarios.iter().map(RiskScenario::clamped_probability).collect();
        let total: f64 = clamped.iter().sum();
        let divisor = if total > 0.0 { total } else { 1.0 };

        clamped.into_iter().map(|p| p / divisor).collect()
    }

    /// Computes expected impact per issue and the overall risk index.
    ///
    /// # Edge Cases
    /// - No scenarios: every expected impact is 0
    /// - All probabilities zero: every expected impact is 0
    /// - No issues: overall risk index is 0
    ///
    /// # Errors
    /// - `ComputationError` if a probability or impact is non-finite
    pub fn assess(request: &RiskRequest) -> Result<RiskAssessment, EngineError> {
        for scenario in &request.scenarios {
            ensure_finite("scenario.probability", scenario.probability)?;
            for impact in scenario.impacts.values() {
                ensure_finite("scenario.impact", *impact)?;
            }
        }
        for issue in &request.issues {
            issue.id.validate()?;
        }

        let probabilities = Self::normalized_probabilities(&request.scenarios);

        let issues: Vec<ExpectedImpact> = request
            .issues
            .iter()
            .map(|issue| {
                let scenarios: Vec<ScenarioContribution> = request
                    .scenarios
                    .iter()
                    .zip(&probabilities)
                    .map(|(scenario, &probability)| {
                        let impact = scenario.impact_on(&issue.id);
                        ScenarioContribution {
                            scenario: scenario.name.clone(),
                            probability,
                            impact,
                            contribution: probability * impact,
                        }
                    })
                    .collect();

                ExpectedImpact {
                    issue_id: issue.id.clone(),
                    expected_impact: scenarios.iter().map(|s| s.contribution).sum(),
                    scenarios,
                }
            })
            .collect();

        let overall_risk_index =
            issues.iter().map(ExpectedImpact::magnitude).sum::<f64>() / issues.len().max(1) as f64;

        Ok(RiskAssessment {
            issues,
            overall_risk_index,
        })
    }
}
