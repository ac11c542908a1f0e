//! A party's stated preference on one issue.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ensure_finite, EngineError, IssueId, PartyId, ValidationError};

/// Shape of a party's utility across an issue range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    #[default]
    Linear,
    Concave,
    Convex,
}

/// Utility-curve descriptor carried with a preference.
///
/// The solvers use linear normalization; the descriptor is passed through
/// for downstream presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UtilityCurve {
    #[serde(rename = "type", default)]
    pub curve_type: CurveType,
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

/// Red lines, must-haves and nice-to-haves for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Constraints {
    #[serde(default)]
    pub red_lines: Vec<String>,
    #[serde(default)]
    pub must_haves: Vec<String>,
    #[serde(default)]
    pub nice_to_haves: Vec<String>,
}

/// (party, issue) preference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub party_id: PartyId,
    pub issue_id: IssueId,
    /// Relevance factor in [0, 1].
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub reservation_value: f64,
    #[serde(default = "default_target_value")]
    pub target_value: f64,
    /// Value currently on the table; offers concede from here.
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub utility_curve: Option<UtilityCurve>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub batna: Option<String>,
}

/// Value assumed on the table before any offer has been made.
pub const DEFAULT_CURRENT_VALUE: f64 = 50.0;

fn default_weight() -> f64 {
    0.5
}

fn default_target_value() -> f64 {
    100.0
}

impl Preference {
    /// Creates a preference with no current value, curve or constraints.
    pub fn new(
        party_id: impl Into<PartyId>,
        issue_id: impl Into<IssueId>,
        weight: f64,
        reservation_value: f64,
        target_value: f64,
    ) -> Self {
        Self {
            party_id: party_id.into(),
            issue_id: issue_id.into(),
            weight,
            reservation_value,
            target_value,
            current_value: None,
            utility_curve: None,
            constraints: Constraints::default(),
            batna: None,
        }
    }

    /// Sets the value currently on the table.
    pub fn with_current_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Sets the BATNA description.
    pub fn with_batna(mut self, batna: impl Into<String>) -> Self {
        self.batna = Some(batna.into());
        self
    }

    /// Current value, or the default opening reference.
    pub fn current_or_default(&self) -> f64 {
        self.current_value.unwrap_or(DEFAULT_CURRENT_VALUE)
    }

    /// Distance between target and reservation.
    pub fn span(&self) -> f64 {
        (self.target_value - self.reservation_value).abs()
    }

    /// Checks ids, weight sign and numeric fields.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.party_id.validate()?;
        self.issue_id.validate()?;
        ensure_finite("preference.weight", self.weight)?;
        ensure_finite("preference.reservation_value", self.reservation_value)?;
        ensure_finite("preference.target_value", self.target_value)?;
        if let Some(current) = self.current_value {
            ensure_finite("preference.current_value", current)?;
        }
        if self.weight < 0.0 {
            return Err(ValidationError::invalid_format(
                "preference.weight",
                format!("must be non-negative, got {}", self.weight),
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_offer_defaults() {
        let pref: Preference =
            serde_json::from_str(r#"{"party_id":"a","issue_id":"price"}"#).unwrap();
        assert_eq!(pref.weight, 0.5);
        assert_eq!(pref.reservation_value, 0.0);
        assert_eq!(pref.target_value, 100.0);
        assert_eq!(pref.current_or_default(), 50.0);
        assert!(pref.constraints.red_lines.is_empty());
    }

    #[test]
    fn deserializes_curve_and_constraints() {
        let pref: Preference = serde_json::from_str(
            r#"{
                "party_id": "a",
                "issue_id": "price",
                "utility_curve": {"type": "concave", "parameters": {"alpha": 0.5}},
                "constraints": {"red_lines": ["no price below 20"]},
                "batna": "Sell to the secondary market"
            }"#,
        )
        .unwrap();
        let curve = pref.utility_curve.unwrap();
        assert_eq!(curve.curve_type, CurveType::Concave);
        assert_eq!(curve.parameters.get("alpha"), Some(&0.5));
        assert_eq!(pref.constraints.red_lines.len(), 1);
        assert!(pref.batna.is_some());
    }

    #[test]
    fn span_is_absolute() {
        assert_eq!(Preference::new("a", "p", 1.0, 80.0, 20.0).span(), 60.0);
        assert_eq!(Preference::new("a", "p", 1.0, 20.0, 80.0).span(), 60.0);
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let pref = Preference::new("a", "price", -0.1, 0.0, 100.0);
        assert!(pref.validate().is_err());
    }
}
