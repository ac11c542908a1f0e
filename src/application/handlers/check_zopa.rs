//! CheckZopaHandler - Command handler for ZOPA checks.

use tracing::{error, info};

use crate::domain::foundation::Envelope;
use crate::domain::zopa::{ZopaAnalyzer, ZopaReport, ZopaRequest};

/// Command to check per-issue zones of possible agreement.
pub type CheckZopaCommand = ZopaRequest;

/// Handler for ZOPA checks.
#[derive(Debug, Default)]
pub struct CheckZopaHandler;

impl CheckZopaHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CheckZopaCommand) -> Envelope<ZopaReport> {
        info!(issues = cmd.issues.len(), parties = cmd.reservations.len(), "Checking ZOPA");

        let envelope = Envelope::from_result(ZopaAnalyzer::check(&cmd));
        match &envelope {
            Envelope::Success(report) => info!(
                all_issues_have_zopa = report.all_issues_have_zopa,
                infeasible = report.infeasible_issue_ids().len(),
                "ZOPA check completed"
            ),
            Envelope::Failed(failure) => error!(error = %failure.error, "ZOPA check failed"),
        }
        envelope
    }
}
