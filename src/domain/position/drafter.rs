//! Position Drafter - Builds briefs from a party's preference on an issue.

use serde::{Deserialize, Serialize};

use super::brief::*;
use crate::domain::foundation::{EngineError, IssueId, PartyId};
use crate::domain::negotiation::{Issue, IssueType, Party, Preference};

/// Input for drafting one brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub party: Party,
    pub issue: Issue,
    pub preference: Preference,
    #[serde(default)]
    pub position_type: PositionKind,
}

/// A drafted brief with the ids it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDraft {
    pub position_type: PositionKind,
    pub party_id: PartyId,
    pub issue_id: IssueId,
    pub position: PositionBrief,
}

/// Drafter for public and private position briefs.
pub struct PositionDrafter;

impl PositionDrafter {
    /// Drafts the requested brief.
    ///
    /// # Errors
    /// - `ValidationError` for blank ids or a negative weight
    /// - `ComputationError` for non-finite preference values
    pub fn draft(request: &DraftRequest) -> Result<PositionDraft, EngineError> {
        request.party.id.validate()?;
        request.issue.id.validate()?;
        request.preference.validate()?;

        let position = match request.position_type {
            PositionKind::Public => PositionBrief::Public(Self::public_position(
                &request.party,
                &request.issue,
                &request.preference,
            )),
            PositionKind::Private => PositionBrief::Private(Self::private_position(
                &request.party,
                &request.issue,
                &request.preference,
            )),
        };

        Ok(PositionDraft {
            position_type: request.position_type,
            party_id: request.party.id.clone(),
            issue_id: request.issue.id.clone(),
            position,
        })
    }

    /// Public stance, arguments and evidence.
    pub fn public_position(party: &Party, issue: &Issue, preference: &Preference) -> PublicPosition {
        let name = &party.name;
        let title = &issue.title;
        let weight = preference.weight;

        let stance = match issue.issue_type {
            IssueType::Distributive if weight > 0.5 => format!(
                "{name} considers {title} a critical priority and will advocate strongly for favorable terms."
            ),
            IssueType::Distributive if weight > 0.25 => {
                format!("{name} views {title} as important and seeks reasonable compromise.")
            }
            IssueType::Distributive => {
                format!("{name} is open to discussion on {title} but has limited flexibility.")
            }
            IssueType::Integrative => format!(
                "{name} believes {title} presents opportunities for mutual gain and creative solutions."
            ),
            IssueType::Linked => format!(
                "{name} recognizes the interconnected nature of {title} and seeks comprehensive solutions."
            ),
        };

        let mut arguments = Vec::new();
        if let Some(country) = &party.country {
            arguments.push(format!("National interests and economic impact on {country}"));
        }
        if party.organization.is_some() {
            arguments.push("Organizational mandate and stakeholder obligations".to_string());
        }
        if weight > 0.5 {
            arguments.push("High strategic importance and long-term implications".to_string());
        }
        if issue.issue_type == IssueType::Integrative {
            arguments.push("Potential for value creation and expanded opportunities".to_string());
        }

        let mut evidence = Vec::new();
        if weight > 0.3 {
            evidence.push("Economic analysis and impact assessments".to_string());
            evidence.push("Stakeholder consultations and feedback".to_string());
        }
        if party.country.is_some() {
            evidence.push("International precedents and best practices".to_string());
        }
        if issue.issue_type == IssueType::Linked {
            evidence.push("Cross-sectoral impact analysis".to_string());
        }

        PublicPosition {
            stance,
            interests: PublicInterests {
                primary: format!("Secure favorable terms on {title}"),
                secondary: "Maintain relationships and reputation".to_string(),
                constraints: "Must meet minimum acceptable outcomes".to_string(),
            },
            arguments,
            evidence,
            negotiation_approach: NegotiationApproach::for_weight(weight),
            flexibility_level: FlexibilityLevel::assess(
                weight,
                preference.reservation_value,
                preference.target_value,
            ),
        }
    }

    /// Candid internal assessment.
    pub fn private_position(party: &Party, issue: &Issue, preference: &Preference) -> PrivatePosition {
        let name = &party.name;
        let title = &issue.title;
        let weight = preference.weight;
        let target = preference.target_value;
        let reservation = preference.reservation_value;
        let priority = PriorityLevel::for_weight(weight);
        let batna = BatnaStrength::assess(preference.batna.as_deref());

        let integrative_potential = if issue.issue_type == IssueType::Integrative {
            "Potential for integrative solutions"
        } else {
            "Limited integrative potential"
        };

        let internal_interests = InternalInterests {
            core_objectives: vec![
                format!("Achieve target value of {target} on {title}"),
                format!("Maintain minimum acceptable outcome of {reservation}"),
                "Preserve relationships and future negotiation capital".to_string(),
            ],
            risk_factors: vec![
                "Public perception and political implications".to_string(),
                "Economic impact and stakeholder reactions".to_string(),
                "Precedent setting for future negotiations".to_string(),
            ],
            opportunities: vec![
                integrative_potential.to_string(),
                "Relationship building with other parties".to_string(),
                "Knowledge sharing and capacity building".to_string(),
            ],
        };

        let mut implications = if batna.is_weak() {
            vec![
                "Limited leverage in negotiations".to_string(),
                "May need to make concessions to reach agreement".to_string(),
            ]
        } else {
            vec![
                "Provides leverage and negotiation power".to_string(),
                "Can walk away if terms are unfavorable".to_string(),
            ]
        };
        if weight > 0.5 {
            implications.push("High priority issue - BATNA strength critical".to_string());
        }

        let fallback_plan = if batna.is_weak() {
            format!("Focus on achieving minimum acceptable outcome of {reservation}")
        } else {
            format!("Implement BATNA if unable to achieve outcomes above {reservation}")
        };

        let concession_strategy = if weight > 0.6 {
            "Minimal concessions, only if reciprocated"
        } else if weight > 0.3 {
            "Selective concessions on lower priority issues"
        } else {
            "Willing to make concessions to build relationships"
        };

        let mut confidential_notes = Vec::new();
        if weight > 0.7 {
            confidential_notes.push(format!("Critical issue for {name} - cannot afford to lose"));
            confidential_notes.push("Consider aggressive tactics if necessary".to_string());
        }
        if batna.is_weak() {
            confidential_notes.push("Weak BATNA - need to be more flexible".to_string());
            confidential_notes.push("Consider building relationships for future negotiations".to_string());
        }
        confidential_notes.push(format!("Monitor other parties' positions on {title}"));
        confidential_notes.push("Prepare for unexpected developments and adapt strategy".to_string());

        PrivatePosition {
            priority_level: priority,
            flexibility: priority.flexibility().to_string(),
            strategy: priority.strategy().to_string(),
            internal_interests,
            batna_analysis: BatnaAnalysis {
                strength: batna,
                implications,
                fallback_plan,
            },
            strategy_details: StrategyDetails {
                opening_position: format!("Start with target value of {target}"),
                concession_strategy: concession_strategy.to_string(),
                deal_breakers: vec![format!("Outcomes below {reservation}")],
                success_metrics: vec![
                    format!("Achieve outcome above {target}"),
                    "Maintain positive relationships".to_string(),
                    "Set favorable precedents".to_string(),
                ],
            },
            confidential_notes,
        }
    }
}
