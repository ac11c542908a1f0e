//! Negotiation input model - parties, issues and stated preferences.
//!
//! These records arrive already validated from the intake collaborator and
//! are never mutated by the engine.

mod issue;
mod party;
mod preference;

pub use issue::{Issue, IssueType};
pub use party::{Party, PartyType};
pub use preference::{Constraints, CurveType, Preference, UtilityCurve, DEFAULT_CURRENT_VALUE};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::NegotiationId;

/// Negotiation header carried into the settlement package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: NegotiationId,
    #[serde(default)]
    pub title: Option<String>,
}

impl Negotiation {
    /// Creates a negotiation header.
    pub fn new(id: impl Into<NegotiationId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
        }
    }
}
