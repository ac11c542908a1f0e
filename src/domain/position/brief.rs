//! Position brief records.

use serde::{Deserialize, Serialize};

/// Which brief to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PositionKind {
    #[default]
    Public,
    Private,
}

/// Overall posture at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationApproach {
    Competitive,
    Mixed,
    Cooperative,
}

impl NegotiationApproach {
    pub fn for_weight(weight: f64) -> Self {
        if weight > 0.6 {
            NegotiationApproach::Competitive
        } else if weight > 0.3 {
            NegotiationApproach::Mixed
        } else {
            NegotiationApproach::Cooperative
        }
    }
}

/// Room for compromise shown publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexibilityLevel {
    Low,
    Moderate,
    High,
}

impl FlexibilityLevel {
    /// Narrow ranges on heavy issues leave little room.
    pub fn assess(weight: f64, reservation_value: f64, target_value: f64) -> Self {
        let range = (target_value - reservation_value).abs();
        if weight > 0.5 && range < 20.0 {
            FlexibilityLevel::Low
        } else if weight > 0.3 && range < 40.0 {
            FlexibilityLevel::Moderate
        } else {
            FlexibilityLevel::High
        }
    }
}

/// Internal priority of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
}

impl PriorityLevel {
    pub fn for_weight(weight: f64) -> Self {
        if weight > 0.7 {
            PriorityLevel::Critical
        } else if weight > 0.4 {
            PriorityLevel::High
        } else {
            PriorityLevel::Medium
        }
    }

    /// Internal flexibility that goes with the priority.
    pub fn flexibility(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Very Limited",
            PriorityLevel::High => "Moderate",
            PriorityLevel::Medium => "High",
        }
    }

    /// One-line strategy that goes with the priority.
    pub fn strategy(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Strong advocacy with minimal concessions",
            PriorityLevel::High => "Balanced approach with selective concessions",
            PriorityLevel::Medium => "Cooperative approach with willingness to compromise",
        }
    }
}

/// Minimum trimmed length of a BATNA description that counts as an alternative.
pub(crate) const BATNA_MODERATE_LEN: usize = 20;

/// Length at which a BATNA description counts as a strong alternative.
pub(crate) const BATNA_STRONG_LEN: usize = 100;

/// How credible a party's walk-away alternative is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatnaStrength {
    Weak,
    Moderate,
    Strong,
}

impl BatnaStrength {
    /// Grades a BATNA by how much detail its description carries.
    pub fn assess(batna: Option<&str>) -> Self {
        let batna = batna.unwrap_or_default();
        if batna.trim().chars().count() < BATNA_MODERATE_LEN {
            BatnaStrength::Weak
        } else if batna.chars().count() < BATNA_STRONG_LEN {
            BatnaStrength::Moderate
        } else {
            BatnaStrength::Strong
        }
    }

    pub fn is_weak(&self) -> bool {
        matches!(self, BatnaStrength::Weak)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInterests {
    pub primary: String,
    pub secondary: String,
    pub constraints: String,
}

/// What a party states publicly on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPosition {
    pub stance: String,
    pub interests: PublicInterests,
    pub arguments: Vec<String>,
    pub evidence: Vec<String>,
    pub negotiation_approach: NegotiationApproach,
    pub flexibility_level: FlexibilityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalInterests {
    pub core_objectives: Vec<String>,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatnaAnalysis {
    pub strength: BatnaStrength,
    pub implications: Vec<String>,
    pub fallback_plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDetails {
    pub opening_position: String,
    pub concession_strategy: String,
    pub deal_breakers: Vec<String>,
    pub success_metrics: Vec<String>,
}

/// Internal assessment behind a party's public position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivatePosition {
    pub priority_level: PriorityLevel,
    pub flexibility: String,
    pub strategy: String,
    pub internal_interests: InternalInterests,
    pub batna_analysis: BatnaAnalysis,
    pub strategy_details: StrategyDetails,
    pub confidential_notes: Vec<String>,
}

/// Either brief. Serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionBrief {
    Public(PublicPosition),
    Private(PrivatePosition),
}

impl PositionBrief {
    pub fn kind(&self) -> PositionKind {
        match self {
            PositionBrief::Public(_) => PositionKind::Public,
            PositionBrief::Private(_) => PositionKind::Private,
        }
    }
}
