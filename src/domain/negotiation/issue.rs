//! Negotiation issue and its value range.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ensure_finite, EngineError, IssueId};

/// How an issue's value is contested between parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Fixed pie: one party's gain is another's loss.
    #[default]
    Distributive,
    /// Room for joint gains.
    Integrative,
    /// Tied to outcomes on other issues.
    Linked,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueType::Distributive => "distributive",
            IssueType::Integrative => "integrative",
            IssueType::Linked => "linked",
        };
        write!(f, "{}", s)
    }
}

/// A negotiable issue with a numeric value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub issue_type: IssueType,
    #[serde(default)]
    pub min_value: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default)]
    pub weight: f64,
}

fn default_max_value() -> f64 {
    100.0
}

impl Issue {
    /// Creates an issue over `[min_value, max_value]`.
    pub fn new(id: impl Into<IssueId>, title: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            issue_type: IssueType::default(),
            min_value,
            max_value,
            weight: 0.0,
        }
    }

    /// Sets the issue type.
    pub fn with_type(mut self, issue_type: IssueType) -> Self {
        self.issue_type = issue_type;
        self
    }

    /// Sets the issue weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns true when the range has positive width.
    pub fn has_range(&self) -> bool {
        self.max_value > self.min_value
    }

    /// Maps a value onto [0, 1] across the issue range.
    ///
    /// A degenerate range (`max <= min`) normalizes everything to 0.
    /// Ranges too wide for `max - min` are measured in halves.
    pub fn normalize(&self, value: f64) -> f64 {
        if !self.has_range() {
            return 0.0;
        }
        let span = self.max_value - self.min_value;
        if span.is_finite() {
            (value - self.min_value) / span
        } else {
            (value / 2.0 - self.min_value / 2.0) / (self.max_value / 2.0 - self.min_value / 2.0)
        }
    }

    /// Checks the structural fields the solvers rely on.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.id.validate()?;
        ensure_finite("issue.min_value", self.min_value)?;
        ensure_finite("issue.max_value", self.max_value)?;
        Ok(())
    }
}
