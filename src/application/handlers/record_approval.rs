//! RecordApprovalHandler - Command handler for package sign-off decisions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::foundation::{EngineError, Envelope};
use crate::domain::package::{ApprovalDecision, ApprovalRole, FinalPackage};
use crate::ports::Clock;

/// Command to record one approver's decision on a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordApprovalCommand {
    pub package: FinalPackage,
    pub role: ApprovalRole,
    pub decision: ApprovalDecision,
    pub actor_id: String,
}

/// Result of a recorded decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordApprovalResult {
    pub package: FinalPackage,
}

/// Handler for approval decisions.
pub struct RecordApprovalHandler {
    clock: Arc<dyn Clock>,
}

impl RecordApprovalHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn handle(&self, cmd: RecordApprovalCommand) -> Envelope<RecordApprovalResult> {
        let negotiation_id = cmd.package.negotiation_id.clone();

        let result = cmd
            .package
            .record_decision(cmd.role, cmd.decision, cmd.actor_id, self.clock.now())
            .map(|package| RecordApprovalResult { package })
            .map_err(EngineError::from);

        let envelope = Envelope::from_result(result);
        match &envelope {
            Envelope::Success(result) => info!(
                negotiation_id = %negotiation_id,
                role = %cmd.role,
                decision = ?cmd.decision,
                package_status = ?result.package.status,
                "Approval decision recorded"
            ),
            Envelope::Failed(failure) => warn!(
                negotiation_id = %negotiation_id,
                role = %cmd.role,
                error = %failure.error,
                "Approval decision rejected"
            ),
        }
        envelope
            .with_failure_context("negotiation_id", negotiation_id.as_str())
            .with_failure_context("role", &cmd.role.to_string())
    }
}
