//! Negotiating party.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PartyId;

/// Kind of actor a party represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    Country,
    #[default]
    Organization,
    Individual,
}

/// A party at the table. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    #[serde(default = "default_party_name")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub party_type: PartyType,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

fn default_party_name() -> String {
    "Unknown Party".to_string()
}

impl Party {
    /// Creates an organization party.
    pub fn new(id: impl Into<PartyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party_type: PartyType::default(),
            country: None,
            organization: None,
        }
    }

    /// Sets the party type.
    pub fn with_type(mut self, party_type: PartyType) -> Self {
        self.party_type = party_type;
        self
    }

    /// Sets the country the party represents.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the organization the party belongs to.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}
