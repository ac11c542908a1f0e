//! Offer record, strategy table and flexibility labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConcessionAnalysis, ConcessionPattern, Consistency};
use crate::domain::foundation::{IssueId, PartyId, Timestamp};

/// Lowest confidence ever reported.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Highest confidence ever reported.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// How a party plays one round on one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStrategy {
    OpeningPosition,
    MaintainPosition,
    MinimalConcession,
    StandardConcession,
    ModerateConcession,
    FlexibleConcession,
    HoldPosition,
}

impl OfferStrategy {
    /// Picks a strategy from the round, the issue weight and the concession pattern.
    ///
    /// | Condition              | Strategy                                      |
    /// |------------------------|-----------------------------------------------|
    /// | round 1                | opening position                              |
    /// | weight > 0.8           | maintain if hardline, else minimal concession |
    /// | weight > 0.5           | moderate concession after round 3, else hold  |
    /// | otherwise              | flexible concession after round 2, else moderate |
    pub fn select(round_number: u32, weight: f64, pattern: ConcessionPattern) -> Self {
        if round_number == 1 {
            return OfferStrategy::OpeningPosition;
        }

        if weight > 0.8 {
            if pattern == ConcessionPattern::Hardline {
                OfferStrategy::MaintainPosition
            } else {
                OfferStrategy::MinimalConcession
            }
        } else if weight > 0.5 {
            if round_number > 3 {
                OfferStrategy::ModerateConcession
            } else {
                OfferStrategy::HoldPosition
            }
        } else if round_number > 2 {
            OfferStrategy::FlexibleConcession
        } else {
            OfferStrategy::ModerateConcession
        }
    }

    /// Share of the target-reservation span conceded per round, if this is a
    /// concession strategy.
    pub fn concession_fraction(&self) -> Option<f64> {
        match self {
            OfferStrategy::MinimalConcession => Some(0.05),
            OfferStrategy::StandardConcession => Some(0.08),
            OfferStrategy::ModerateConcession => Some(0.10),
            OfferStrategy::FlexibleConcession => Some(0.15),
            OfferStrategy::OpeningPosition
            | OfferStrategy::MaintainPosition
            | OfferStrategy::HoldPosition => None,
        }
    }

    /// Wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStrategy::OpeningPosition => "opening_position",
            OfferStrategy::MaintainPosition => "maintain_position",
            OfferStrategy::MinimalConcession => "minimal_concession",
            OfferStrategy::StandardConcession => "standard_concession",
            OfferStrategy::ModerateConcession => "moderate_concession",
            OfferStrategy::FlexibleConcession => "flexible_concession",
            OfferStrategy::HoldPosition => "hold_position",
        }
    }
}

impl fmt::Display for OfferStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much room a party has left on an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flexibility {
    Low,
    Moderate,
    High,
}

impl Flexibility {
    /// Derives the label from weight and round.
    pub fn assess(weight: f64, round_number: u32) -> Self {
        if weight > 0.8 {
            Flexibility::Low
        } else if weight > 0.5 {
            if round_number > 3 {
                Flexibility::Moderate
            } else {
                Flexibility::Low
            }
        } else if round_number > 2 {
            Flexibility::High
        } else {
            Flexibility::Moderate
        }
    }
}

/// Confidence in an offer, in `[0.1, 1.0]`.
///
/// `(weight * 0.8 + 0.2) * max(0.5, 1 - 0.1 * (round - 1)) * pattern_factor`,
/// where consistent histories score 1.1 and variable ones 0.9.
pub fn offer_confidence(weight: f64, round_number: u32, analysis: &ConcessionAnalysis) -> f64 {
    let base = weight * 0.8 + 0.2;
    let round_factor = (1.0 - 0.1 * f64::from(round_number.saturating_sub(1))).max(0.5);
    let pattern_factor = match analysis.consistency {
        Consistency::Consistent => 1.1,
        Consistency::Variable => 0.9,
        Consistency::Unknown => 1.0,
    };

    (base * round_factor * pattern_factor).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// A proposed value for one party on one issue in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub party_id: PartyId,
    pub issue_id: IssueId,
    pub round_number: u32,
    pub proposed_value: f64,
    pub strategy: OfferStrategy,
    pub rationale: String,
    pub confidence: f64,
    pub flexibility: Flexibility,
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(consistency: Consistency) -> ConcessionAnalysis {
        ConcessionAnalysis {
            pattern: ConcessionPattern::Moderate,
            concession_rate: 3.0,
            consistency,
        }
    }

    #[test]
    fn round_one_always_opens() {
        for weight in [0.0, 0.5, 0.9] {
            assert_eq!(
                OfferStrategy::select(1, weight, ConcessionPattern::Hardline),
                OfferStrategy::OpeningPosition
            );
        }
    }

    #[test]
    fn high_weight_strategies() {
        assert_eq!(
            OfferStrategy::select(2, 0.9, ConcessionPattern::Hardline),
            OfferStrategy::MaintainPosition
        );
        assert_eq!(
            OfferStrategy::select(2, 0.9, ConcessionPattern::Flexible),
            OfferStrategy::MinimalConcession
        );
    }

    #[test]
    fn medium_weight_strategies() {
        assert_eq!(
            OfferStrategy::select(3, 0.6, ConcessionPattern::Initial),
            OfferStrategy::HoldPosition
        );
        assert_eq!(
            OfferStrategy::select(4, 0.6, ConcessionPattern::Initial),
            OfferStrategy::ModerateConcession
        );
    }

    #[test]
    fn low_weight_strategies() {
        assert_eq!(
            OfferStrategy::select(2, 0.5, ConcessionPattern::Initial),
            OfferStrategy::ModerateConcession
        );
        assert_eq!(
            OfferStrategy::select(3, 0.5, ConcessionPattern::Initial),
            OfferStrategy::FlexibleConcession
        );
    }

    #[test]
    fn concession_fractions() {
        assert_eq!(OfferStrategy::MinimalConcession.concession_fraction(), Some(0.05));
        assert_eq!(OfferStrategy::StandardConcession.concession_fraction(), Some(0.08));
        assert_eq!(OfferStrategy::HoldPosition.concession_fraction(), None);
    }

    #[test]
    fn flexibility_labels() {
        assert_eq!(Flexibility::assess(0.9, 5), Flexibility::Low);
        assert_eq!(Flexibility::assess(0.6, 3), Flexibility::Low);
        assert_eq!(Flexibility::assess(0.6, 4), Flexibility::Moderate);
        assert_eq!(Flexibility::assess(0.3, 2), Flexibility::Moderate);
        assert_eq!(Flexibility::assess(0.3, 3), Flexibility::High);
    }

    #[test]
    fn confidence_formula() {
        let c = offer_confidence(0.5, 1, &analysis(Consistency::Unknown));
        assert!((c - 0.6).abs() < 1e-12);

        let c = offer_confidence(0.5, 3, &analysis(Consistency::Consistent));
        // 0.6 * 0.8 * 1.1
        assert!((c - 0.528).abs() < 1e-12);

        let c = offer_confidence(0.5, 3, &analysis(Consistency::Variable));
        assert!((c - 0.432).abs() < 1e-12);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(offer_confidence(1.0, 1, &analysis(Consistency::Consistent)), 1.0);
        assert!(offer_confidence(0.0, 20, &analysis(Consistency::Variable)) >= MIN_CONFIDENCE);
    }

    #[test]
    fn round_factor_floors_at_half() {
        let late = offer_confidence(1.0, 30, &analysis(Consistency::Unknown));
        assert!((late - 0.5).abs() < 1e-12);
    }

    #[test]
    fn strategy_serializes_snake_case() {
        let json = serde_json::to_string(&OfferStrategy::OpeningPosition).unwrap();
        assert_eq!(json, "\"opening_position\"");
    }
}
