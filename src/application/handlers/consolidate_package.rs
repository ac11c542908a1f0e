//! ConsolidatePackageHandler - Command handler for final package drafts.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::foundation::Envelope;
use crate::domain::package::{ConsolidationRequest, FinalPackage, PackageConsolidator};

/// Command to consolidate a draft settlement package.
pub type ConsolidatePackageCommand = ConsolidationRequest;

/// Result of a successful consolidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatePackageResult {
    pub package: FinalPackage,
}

/// Handler for package consolidation.
pub struct ConsolidatePackageHandler {
    consolidator: PackageConsolidator,
}

impl ConsolidatePackageHandler {
    pub fn new(risk_note_threshold: f64) -> Self {
        Self {
            consolidator: PackageConsolidator::new(risk_note_threshold),
        }
    }

    pub fn handle(&self, cmd: ConsolidatePackageCommand) -> Envelope<ConsolidatePackageResult> {
        let negotiation_id = cmd.negotiation.id.clone();
        info!(negotiation_id = %negotiation_id, offers = cmd.offers.len(), "Consolidating final package");

        let envelope = Envelope::from_result(self.consolidator.consolidate(&cmd))
            .map(|package| ConsolidatePackageResult { package });

        match &envelope {
            Envelope::Success(result) => info!(
                negotiation_id = %negotiation_id,
                selected_offers = result.package.selected_offers.len(),
                risk_notes = result.package.risk_notes.len(),
                "Consolidation complete"
            ),
            Envelope::Failed(failure) => {
                error!(negotiation_id = %negotiation_id, error = %failure.error, "Consolidation failed")
            }
        }
        envelope.with_failure_context("negotiation_id", negotiation_id.as_str())
    }
}
