//! Package Consolidator - Merges offers, optimizer output and risk into a package.

use serde::{Deserialize, Serialize};

use super::{ApprovalRequest, FinalPackage, PackageStatus, PackageSummary, RiskNote};
use crate::domain::foundation::EngineError;
use crate::domain::negotiation::{Issue, Negotiation, Party};
use crate::domain::optimizer::{BundleAssignment, OptimizationResult};
use crate::domain::risk::RiskAssessment;
use crate::domain::strategy::Offer;

/// Absolute expected impact at which an issue gets a risk note.
pub const DEFAULT_RISK_NOTE_THRESHOLD: f64 = 0.15;

/// Text attached to every risk note.
pub const HIGH_RISK_NOTE: &str = "High expected risk impact";

/// Input for consolidation. Optimizer and risk output are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationRequest {
    pub negotiation: Negotiation,
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub positions: serde_json::Value,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub optimization: Option<OptimizationResult>,
    #[serde(default)]
    pub risk: Option<RiskAssessment>,
}

/// Builds draft packages.
#[derive(Debug, Clone)]
pub struct PackageConsolidator {
    risk_note_threshold: f64,
}

impl Default for PackageConsolidator {
    fn default() -> Self {
        Self::new(DEFAULT_RISK_NOTE_THRESHOLD)
    }
}

impl PackageConsolidator {
    /// Creates a consolidator with the given risk note threshold.
    pub fn new(risk_note_threshold: f64) -> Self {
        Self { risk_note_threshold }
    }

    /// Consolidates a draft package.
    ///
    /// Per issue, the offer closest to the optimizer's recommended value is
    /// selected; without a recommendation the most confident offer wins.
    /// Ties go to the earlier offer. Issues without offers are skipped.
    ///
    /// # Edge Cases
    /// - No optimization: no recommended values, basis defaults to nash
    /// - No risk assessment: no risk notes
    ///
    /// # Errors
    /// - `ValidationError` for a blank negotiation id
    pub fn consolidate(&self, request: &ConsolidationRequest) -> Result<FinalPackage, EngineError> {
        request.negotiation.id.validate()?;

        let recommended_values = request
            .optimization
            .as_ref()
            .map(OptimizationResult::recommended_values)
            .unwrap_or_default();

        let selected_offers = request
            .issues
            .iter()
            .filter_map(|issue| Self::select_offer(issue, &request.offers, &recommended_values))
            .cloned()
            .collect();

        let risk_notes = request
            .risk
            .as_ref()
            .map(|risk| {
                risk.issues_at_or_above(self.risk_note_threshold)
                    .into_iter()
                    .map(|impact| RiskNote {
                        issue_id: impact.issue_id.clone(),
                        note: HIGH_RISK_NOTE.to_string(),
                        expected_impact: impact.expected_impact,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let title = request.negotiation.title.as_deref().unwrap_or("Negotiation");

        Ok(FinalPackage {
            status: PackageStatus::Draft,
            negotiation_id: request.negotiation.id.clone(),
            title: format!("Final Package: {}", title),
            summary: PackageSummary {
                parties: request.parties.iter().map(|p| p.name.clone()).collect(),
                issues: request.issues.iter().map(|i| i.title.clone()).collect(),
                recommendation_basis: request
                    .optimization
                    .as_ref()
                    .map(|o| o.method)
                    .unwrap_or_default(),
            },
            positions: request.positions.clone(),
            selected_offers,
            recommended_values,
            pareto_frontier_size: request.optimization.as_ref().map(|o| o.frontier_size),
            risk_notes,
            approvals_required: ApprovalRequest::required_checklist(),
        })
    }

    fn select_offer<'a>(
        issue: &Issue,
        offers: &'a [Offer],
        recommended_values: &BundleAssignment,
    ) -> Option<&'a Offer> {
        let candidates = offers.iter().filter(|offer| offer.issue_id == issue.id);

        match recommended_values.get(&issue.id) {
            Some(&target) => candidates.fold(None, |best: Option<&Offer>, offer| match best {
                Some(current)
                    if (current.proposed_value - target).abs()
                        <= (offer.proposed_value - target).abs() =>
                {
                    Some(current)
                }
                _ => Some(offer),
            }),
            None => candidates.fold(None, |best: Option<&Offer>, offer| match best {
                Some(current) if current.confidence >= offer.confidence => Some(current),
                _ => Some(offer),
            }),
        }
    }
}
