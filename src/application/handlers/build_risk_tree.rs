//! BuildRiskTreeHandler - Command handler for scenario risk assessment.

use tracing::{error, info};

use crate::domain::foundation::Envelope;
use crate::domain::risk::{RiskAssessment, RiskCalculator, RiskRequest};

/// Command to compute expected impact per issue.
pub type BuildRiskTreeCommand = RiskRequest;

/// Handler for risk assessment.
#[derive(Debug, Default)]
pub struct BuildRiskTreeHandler;

impl BuildRiskTreeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: BuildRiskTreeCommand) -> Envelope<RiskAssessment> {
        info!(issues = cmd.issues.len(), scenarios = cmd.scenarios.len(), "Building risk tree");

        let envelope = Envelope::from_result(RiskCalculator::assess(&cmd));
        match &envelope {
            Envelope::Success(assessment) => info!(
                overall_risk_index = assessment.overall_risk_index,
                "Risk tree completed"
            ),
            Envelope::Failed(failure) => error!(error = %failure.error, "Risk tree build failed"),
        }
        envelope
    }
}
