//! Package Module - Final settlement package and its approvals.
//!
//! # Components
//!
//! - `PackageConsolidator` - Selects one offer per issue and attaches risk notes
//! - `FinalPackage` - The draft settlement, with `record_decision` for sign-off
//! - `ApprovalStatus` - Per-role approval state machine

mod approval;
mod consolidator;
#[allow(clippy::module_inception)]
mod package;

pub use approval::{ApprovalDecision, ApprovalRequest, ApprovalRole, ApprovalStatus};
pub use consolidator::{
    ConsolidationRequest, PackageConsolidator, DEFAULT_RISK_NOTE_THRESHOLD, HIGH_RISK_NOTE,
};
pub use package::{FinalPackage, PackageStatus, PackageSummary, RiskNote};
