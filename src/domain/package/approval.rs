//! Approval checklist attached to a final package.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, Timestamp};

/// Who must sign off a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalRole {
    Mediator,
    Delegate,
    Analyst,
}

impl ApprovalRole {
    /// Roles every package requires, in checklist order.
    pub const REQUIRED: [ApprovalRole; 3] = [
        ApprovalRole::Mediator,
        ApprovalRole::Delegate,
        ApprovalRole::Analyst,
    ];
}

impl fmt::Display for ApprovalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalRole::Mediator => "mediator",
            ApprovalRole::Delegate => "delegate",
            ApprovalRole::Analyst => "analyst",
        };
        write!(f, "{}", s)
    }
}

/// State of one approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl StateMachine for ApprovalStatus {
    /// Only a pending request can be decided.
    fn successors(&self) -> &'static [Self] {
        use ApprovalStatus::*;
        match self {
            Pending => &[Approved, Rejected, Cancelled],
            Approved | Rejected | Cancelled => &[],
        }
    }
}

/// A decision an approver can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approve,
    Reject,
    Cancel,
}

impl ApprovalDecision {
    /// Status the decision moves a request to.
    pub fn target_status(&self) -> ApprovalStatus {
        match self {
            ApprovalDecision::Approve => ApprovalStatus::Approved,
            ApprovalDecision::Reject => ApprovalStatus::Rejected,
            ApprovalDecision::Cancel => ApprovalStatus::Cancelled,
        }
    }
}

/// One entry of the approval checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub role: ApprovalRole,
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<Timestamp>,
}

impl ApprovalRequest {
    /// Creates a pending request.
    pub fn pending(role: ApprovalRole) -> Self {
        Self {
            role,
            status: ApprovalStatus::Pending,
            decided_by: None,
            decided_at: None,
        }
    }

    /// The standard mediator/delegate/analyst checklist, all pending.
    pub fn required_checklist() -> Vec<Self> {
        ApprovalRole::REQUIRED.into_iter().map(Self::pending).collect()
    }
}
