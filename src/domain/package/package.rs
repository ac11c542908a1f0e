//! Final settlement package and its approval lifecycle.

use serde::{Deserialize, Serialize};

use super::{ApprovalDecision, ApprovalRequest, ApprovalRole, ApprovalStatus};
use crate::domain::foundation::{IssueId, NegotiationId, StateMachine, Timestamp, ValidationError};
use crate::domain::optimizer::{AggregationMethod, BundleAssignment};
use crate::domain::strategy::Offer;

/// Lifecycle of a package as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    #[default]
    Draft,
    Approved,
    Rejected,
}

/// Human-readable overview of the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub parties: Vec<String>,
    pub issues: Vec<String>,
    pub recommendation_basis: AggregationMethod,
}

/// Flag raised for an issue with a large expected risk impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskNote {
    pub issue_id: IssueId,
    pub note: String,
    pub expected_impact: f64,
}

/// Draft settlement combining offers, optimizer output and risk notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalPackage {
    pub status: PackageStatus,
    pub negotiation_id: NegotiationId,
    pub title: String,
    pub summary: PackageSummary,
    /// Position briefs as supplied by the caller.
    #[serde(default)]
    pub positions: serde_json::Value,
    pub selected_offers: Vec<Offer>,
    pub recommended_values: BundleAssignment,
    pub pareto_frontier_size: Option<usize>,
    pub risk_notes: Vec<RiskNote>,
    pub approvals_required: Vec<ApprovalRequest>,
}

impl FinalPackage {
    /// Looks up the approval request for a role.
    pub fn approval(&self, role: ApprovalRole) -> Option<&ApprovalRequest> {
        self.approvals_required.iter().find(|request| request.role == role)
    }

    /// Returns true once every approval has been granted.
    pub fn is_fully_approved(&self) -> bool {
        !self.approvals_required.is_empty()
            && self
                .approvals_required
                .iter()
                .all(|request| request.status == ApprovalStatus::Approved)
    }

    /// Records a role's decision and returns the updated package.
    ///
    /// The package becomes `Rejected` as soon as any request is rejected and
    /// `Approved` once every request is approved. `self` is left unchanged.
    ///
    /// # Errors
    /// - `ValidationError` if the role is not on the checklist
    /// - `ValidationError` if the role has already decided
    pub fn record_decision(
        &self,
        role: ApprovalRole,
        decision: ApprovalDecision,
        actor_id: impl Into<String>,
        at: Timestamp,
    ) -> Result<FinalPackage, ValidationError> {
        let mut next = self.clone();
        let request = next
            .approvals_required
            .iter_mut()
            .find(|request| request.role == role)
            .ok_or_else(|| {
                ValidationError::invalid_format("role", format!("'{}' is not a required approver", role))
            })?;

        request.status = request.status.transition_to(decision.target_status())?;
        request.decided_by = Some(actor_id.into());
        request.decided_at = Some(at);

        next.status = next.derive_status();
        Ok(next)
    }

    fn derive_status(&self) -> PackageStatus {
        if self
            .approvals_required
            .iter()
            .any(|request| request.status == ApprovalStatus::Rejected)
        {
            PackageStatus::Rejected
        } else if self.is_fully_approved() {
            PackageStatus::Approved
        } else {
            PackageStatus::Draft
        }
    }
}
