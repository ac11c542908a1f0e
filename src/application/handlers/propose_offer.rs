//! ProposeOfferHandler - Command handler for per-round offer proposals.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::foundation::{Envelope, IssueId, PartyId};
use crate::domain::strategy::{Offer, OfferProposer, OfferRequest};
use crate::ports::Clock;

/// Command to propose the next offer for one party on one issue.
pub type ProposeOfferCommand = OfferRequest;

/// Result of a successful proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposeOfferResult {
    pub offer: Offer,
    pub party_id: PartyId,
    pub issue_id: IssueId,
}

/// Handler for offer proposals.
pub struct ProposeOfferHandler {
    clock: Arc<dyn Clock>,
}

impl ProposeOfferHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn handle(&self, cmd: ProposeOfferCommand) -> Envelope<ProposeOfferResult> {
        let party_id = cmd.party.id.clone();
        let issue_id = cmd.issue.id.clone();
        info!(
            party_id = %party_id,
            issue_id = %issue_id,
            round_number = cmd.round_number,
            "Starting offer proposal"
        );

        let result = OfferProposer::propose(&cmd, self.clock.now()).map(|offer| ProposeOfferResult {
            offer,
            party_id: party_id.clone(),
            issue_id: issue_id.clone(),
        });

        match Envelope::from_result(result) {
            Envelope::Success(result) => {
                info!(
                    party_id = %party_id,
                    issue_id = %issue_id,
                    proposed_value = result.offer.proposed_value,
                    strategy = %result.offer.strategy,
                    "Offer proposal completed"
                );
                Envelope::Success(result)
            }
            failed => {
                if let Some(failure) = failed.failure() {
                    error!(
                        party_id = %party_id,
                        issue_id = %issue_id,
                        error = %failure.error,
                        "Offer proposal failed"
                    );
                }
                failed
                    .with_failure_context("party_id", party_id.as_str())
                    .with_failure_context("issue_id", issue_id.as_str())
            }
        }
    }
}
