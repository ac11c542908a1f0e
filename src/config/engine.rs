//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::optimizer::{
    SolverSettings, DEFAULT_COMBINATION_CAP, DEFAULT_GRID_RESOLUTION, DEFAULT_MAX_FRONTIER_POINTS,
};
use crate::domain::package::DEFAULT_RISK_NOTE_THRESHOLD;

/// Upper bound on grid points per issue
pub const MAX_GRID_RESOLUTION: usize = 101;

/// Upper bound on bundles evaluated per optimization; the frontier check is quadratic in this
pub const MAX_COMBINATION_CAP: usize = 50_000;

/// Tuning for the analytics components
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Grid points per issue in the optimizer
    #[serde(default = "default_grid_resolution")]
    pub grid_resolution: usize,

    /// Maximum bundle assignments evaluated per optimization
    #[serde(default = "default_combination_cap")]
    pub combination_cap: usize,

    /// Frontier size used when a request does not set one
    #[serde(default = "default_max_points")]
    pub default_max_points: usize,

    /// Absolute expected impact that earns a package risk note
    #[serde(default = "default_risk_note_threshold")]
    pub risk_note_threshold: f64,
}

impl EngineConfig {
    /// Solver settings derived from this section
    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            grid_resolution: self.grid_resolution,
            combination_cap: self.combination_cap,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.grid_resolution < 2 {
            return Err(ValidationError::GridResolutionTooSmall(self.grid_resolution));
        }
        if self.grid_resolution > MAX_GRID_RESOLUTION {
            return Err(ValidationError::GridResolutionTooLarge {
                max: MAX_GRID_RESOLUTION,
                actual: self.grid_resolution,
            });
        }
        if self.combination_cap == 0 {
            return Err(ValidationError::InvalidCombinationCap);
        }
        if self.combination_cap > MAX_COMBINATION_CAP {
            return Err(ValidationError::CombinationCapTooLarge {
                max: MAX_COMBINATION_CAP,
                actual: self.combination_cap,
            });
        }
        if self.default_max_points == 0 {
            return Err(ValidationError::InvalidMaxPoints);
        }
        if !(0.0..=1.0).contains(&self.risk_note_threshold) {
            return Err(ValidationError::InvalidRiskThreshold(self.risk_note_threshold));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_resolution: default_grid_resolution(),
            combination_cap: default_combination_cap(),
            default_max_points: default_max_points(),
            risk_note_threshold: default_risk_note_threshold(),
        }
    }
}

fn default_grid_resolution() -> usize {
    DEFAULT_GRID_RESOLUTION
}

fn default_combination_cap() -> usize {
    DEFAULT_COMBINATION_CAP
}

fn default_max_points() -> usize {
    DEFAULT_MAX_FRONTIER_POINTS
}

fn default_risk_note_threshold() -> f64 {
    DEFAULT_RISK_NOTE_THRESHOLD
}
