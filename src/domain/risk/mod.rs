//! Risk Module - Scenario-weighted expected impact per issue.
//!
//! # Components
//!
//! - `RiskScenario` - A named outcome with a raw probability and per-issue impacts
//! - `RiskCalculator` - Probability normalization, expected impact, overall index

mod calculator;
mod scenario;

pub use calculator::{
    ExpectedImpact, RiskAssessment, RiskCalculator, RiskRequest, ScenarioContribution,
};
pub use scenario::{RiskScenario, DEFAULT_SCENARIO_NAME};
