//! Offer Proposer - Turns a preference and offer history into the next offer.

use serde::{Deserialize, Serialize};

use super::offer::offer_confidence;
use super::{ConcessionAnalysis, Flexibility, Offer, OfferStrategy, PriorOffer};
use crate::domain::foundation::{EngineError, Timestamp, ValidationError};
use crate::domain::negotiation::{Issue, Party, Preference};

/// Weight above which an opening anchors at 90% of target instead of 80%.
const STRONG_OPENING_WEIGHT: f64 = 0.7;

/// Input for one (party, issue, round) proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRequest {
    pub party: Party,
    pub issue: Issue,
    pub preference: Preference,
    pub round_number: u32,
    #[serde(default)]
    pub previous_offers: Vec<PriorOffer>,
}

/// Proposer for per-round offers.
pub struct OfferProposer;

impl OfferProposer {
    /// Proposes the next offer.
    ///
    /// # Algorithm
    /// 1. Analyze the party's concession pattern from prior offers
    /// 2. Select a strategy from round, weight and pattern
    /// 3. Compute the proposed value, confidence and flexibility
    /// 4. Fill in the rationale template for the strategy
    ///
    /// # Errors
    /// - `ValidationError` for round 0, blank ids or a negative weight
    /// - `ValidationError` when the preference belongs to another party or issue
    /// - `ComputationError` for non-finite preference values
    pub fn propose(request: &OfferRequest, at: Timestamp) -> Result<Offer, EngineError> {
        if request.round_number == 0 {
            return Err(ValidationError::invalid_format("round_number", "rounds start at 1").into());
        }
        request.party.id.validate()?;
        request.issue.id.validate()?;
        request.preference.validate()?;
        if request.preference.party_id != request.party.id {
            return Err(ValidationError::invalid_format(
                "preference.party_id",
                format!("'{}' does not match party '{}'", request.preference.party_id, request.party.id),
            )
            .into());
        }
        if request.preference.issue_id != request.issue.id {
            return Err(ValidationError::invalid_format(
                "preference.issue_id",
                format!("'{}' does not match issue '{}'", request.preference.issue_id, request.issue.id),
            )
            .into());
        }

        let preference = &request.preference;
        let weight = preference.weight;
        let analysis = ConcessionAnalysis::analyze(&request.previous_offers, &request.party.id);
        let strategy = OfferStrategy::select(request.round_number, weight, analysis.pattern);
        let proposed_value = Self::proposed_value(strategy, preference);

        Ok(Offer {
            party_id: request.party.id.clone(),
            issue_id: request.issue.id.clone(),
            round_number: request.round_number,
            proposed_value,
            strategy,
            rationale: Self::rationale(strategy, &request.party.name, &request.issue.title, proposed_value),
            confidence: offer_confidence(weight, request.round_number, &analysis),
            flexibility: Flexibility::assess(weight, request.round_number),
            timestamp: at,
        })
    }

    /// Value to put on the table under `strategy`.
    ///
    /// Concessions move the current value toward the reservation value by
    /// `fraction * |target - reservation| * weight` and stop at the
    /// reservation value.
    pub fn proposed_value(strategy: OfferStrategy, preference: &Preference) -> f64 {
        let current = preference.current_or_default();
        let reservation = preference.reservation_value;

        match strategy {
            OfferStrategy::OpeningPosition => {
                let anchor = if preference.weight > STRONG_OPENING_WEIGHT { 0.9 } else { 0.8 };
                preference.target_value * anchor
            }
            OfferStrategy::MaintainPosition | OfferStrategy::HoldPosition => current,
            concession => {
                let fraction = concession.concession_fraction().unwrap_or(0.0);
                let step = preference.span() * fraction * preference.weight;

                if current > reservation {
                    (current - step).max(reservation)
                } else {
                    (current + step).min(reservation)
                }
            }
        }
    }

    fn rationale(strategy: OfferStrategy, party: &str, issue: &str, value: f64) -> String {
        match strategy {
            OfferStrategy::OpeningPosition => format!(
                "{party} presents initial position on {issue} at {value:.1}, \
                 reflecting our core interests and priorities in this negotiation."
            ),
            OfferStrategy::MaintainPosition => format!(
                "{party} maintains our position at {value:.1} on {issue}, \
                 as this issue remains critical to our objectives."
            ),
            OfferStrategy::MinimalConcession => format!(
                "{party} makes a limited adjustment to {value:.1} on {issue}, \
                 demonstrating our willingness to engage while protecting vital interests."
            ),
            OfferStrategy::ModerateConcession => format!(
                "{party} proposes {value:.1} on {issue}, \
                 showing flexibility to advance the negotiation toward a mutually beneficial outcome."
            ),
            OfferStrategy::FlexibleConcession => format!(
                "{party} offers {value:.1} on {issue}, \
                 making a significant concession to demonstrate our commitment to reaching agreement."
            ),
            OfferStrategy::HoldPosition => format!(
                "{party} maintains our position at {value:.1} on {issue}, \
                 seeking to understand other parties' positions before making further adjustments."
            ),
            OfferStrategy::StandardConcession => format!(
                "{party} proposes {value:.1} on {issue}, \
                 aiming to move the negotiation forward constructively."
            ),
        }
    }
}
