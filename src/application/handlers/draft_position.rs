//! DraftPositionHandler - Command handler for position briefs.

use tracing::{error, info};

use crate::domain::foundation::Envelope;
use crate::domain::position::{DraftRequest, PositionDraft, PositionDrafter};

/// Command to draft a public or private position brief.
pub type DraftPositionCommand = DraftRequest;

/// Handler for position drafting.
#[derive(Debug, Default)]
pub struct DraftPositionHandler;

impl DraftPositionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: DraftPositionCommand) -> Envelope<PositionDraft> {
        let party_id = cmd.party.id.clone();
        let issue_id = cmd.issue.id.clone();
        info!(
            party_id = %party_id,
            issue_id = %issue_id,
            position_type = ?cmd.position_type,
            "Starting position drafting"
        );

        let envelope = Envelope::from_result(PositionDrafter::draft(&cmd));
        match &envelope {
            Envelope::Success(_) => {
                info!(party_id = %party_id, issue_id = %issue_id, "Position drafting completed")
            }
            Envelope::Failed(failure) => error!(
                party_id = %party_id,
                issue_id = %issue_id,
                error = %failure.error,
                "Position drafting failed"
            ),
        }
        envelope
            .with_failure_context("party_id", party_id.as_str())
            .with_failure_context("issue_id", issue_id.as_str())
    }
}
