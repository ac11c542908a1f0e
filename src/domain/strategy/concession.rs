//! Concession pattern analysis over a party's prior offers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::PartyId;

/// Average concession below which a party counts as hardline.
pub const HARDLINE_BELOW: f64 = 2.0;

/// Average concession below which a party counts as moderate.
pub const MODERATE_BELOW: f64 = 5.0;

/// A previously made offer, as far as pattern analysis needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorOffer {
    pub party_id: PartyId,
    pub proposed_value: f64,
    #[serde(default)]
    pub round_number: Option<u32>,
}

impl PriorOffer {
    pub fn new(party_id: impl Into<PartyId>, proposed_value: f64) -> Self {
        Self {
            party_id: party_id.into(),
            proposed_value,
            round_number: None,
        }
    }
}

/// How a party has been conceding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcessionPattern {
    /// No offers have been made yet.
    Initial,
    /// Fewer than two offers from this party.
    InsufficientData,
    Hardline,
    Moderate,
    Flexible,
}

/// Whether concession sizes repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    Unknown,
    Consistent,
    Variable,
}

/// Result of analyzing a party's offer history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcessionAnalysis {
    pub pattern: ConcessionPattern,
    /// Average absolute change between consecutive offers.
    pub concession_rate: f64,
    pub consistency: Consistency,
}

impl ConcessionAnalysis {
    fn without_history(pattern: ConcessionPattern) -> Self {
        Self {
            pattern,
            concession_rate: 0.0,
            consistency: Consistency::Unknown,
        }
    }

    /// Analyzes `party_id`'s offers, in the order given.
    ///
    /// # Edge Cases
    /// - No offers at all: `Initial`
    /// - Fewer than two offers from this party: `InsufficientData`
    /// - At most two distinct concession sizes: `Consistent`
    pub fn analyze(previous_offers: &[PriorOffer], party_id: &PartyId) -> Self {
        if previous_offers.is_empty() {
            return Self::without_history(ConcessionPattern::Initial);
        }

        let values: Vec<f64> = previous_offers
            .iter()
            .filter(|offer| &offer.party_id == party_id)
            .map(|offer| offer.proposed_value)
            .collect();

        if values.len() < 2 {
            return Self::without_history(ConcessionPattern::InsufficientData);
        }

        let mut concessions: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        let concession_rate = concessions.iter().sum::<f64>() / concessions.len() as f64;

        let pattern = if concession_rate < HARDLINE_BELOW {
            ConcessionPattern::Hardline
        } else if concession_rate < MODERATE_BELOW {
            ConcessionPattern::Moderate
        } else {
            ConcessionPattern::Flexible
        };

        concessions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        concessions.dedup();
        let consistency = if concessions.len() <= 2 {
            Consistency::Consistent
        } else {
            Consistency::Variable
        };

        Self {
            pattern,
            concession_rate,
            consistency,
        }
    }
}
