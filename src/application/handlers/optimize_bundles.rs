//! OptimizeBundlesHandler - Command handler for Pareto bundle optimization.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::domain::foundation::{EngineError, Envelope};
use crate::domain::negotiation::Issue;
use crate::domain::optimizer::{
    AggregationMethod, OptimizationRequest, OptimizationResult, ParetoSolver, SolverSettings,
    UtilityWeights,
};

/// Command to search the bundle space for Pareto-efficient assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeBundlesCommand {
    pub issues: Vec<Issue>,
    pub utilities: UtilityWeights,
    /// Aggregation method name; nash when absent.
    #[serde(default)]
    pub method: Option<String>,
    /// Frontier cap; the configured default when absent.
    #[serde(default)]
    pub max_points: Option<usize>,
}

/// Handler for bundle optimization.
pub struct OptimizeBundlesHandler {
    solver: ParetoSolver,
    default_max_points: usize,
}

impl OptimizeBundlesHandler {
    pub fn new(settings: SolverSettings, default_max_points: usize) -> Self {
        Self {
            solver: ParetoSolver::new(settings),
            default_max_points,
        }
    }

    pub fn handle(&self, cmd: OptimizeBundlesCommand) -> Envelope<OptimizationResult> {
        info!(
            issues = cmd.issues.len(),
            parties = cmd.utilities.len(),
            "Starting bundle optimization"
        );

        let envelope = Envelope::from_result(self.optimize(cmd));
        match &envelope {
            Envelope::Success(result) => info!(
                method = %result.method,
                frontier_size = result.frontier_size,
                combinations = result.combinations_evaluated,
                exhaustive = result.exhaustive,
                "Bundle optimization completed"
            ),
            Envelope::Failed(failure) => error!(error = %failure.error, "Bundle optimization failed"),
        }
        envelope
    }

    fn optimize(&self, cmd: OptimizeBundlesCommand) -> Result<OptimizationResult, EngineError> {
        // 1. Resolve method and frontier cap
        let method = match cmd.method.as_deref() {
            Some(name) => name.parse::<AggregationMethod>()?,
            None => AggregationMethod::default(),
        };
        let max_points = cmd.max_points.unwrap_or(self.default_max_points);

        // 2. Solve
        let request = OptimizationRequest {
            issues: cmd.issues,
            utilities: cmd.utilities,
            method,
            max_points,
        };
        let result = self.solver.solve(&request)?;

        if !result.exhaustive {
            debug!(
                cap = self.solver.settings().combination_cap,
                "Combination cap reached before the product space was exhausted"
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn command(method: Option<&str>) -> OptimizeBundlesCommand {
        serde_json::from_value(serde_json::json!({
            "issues": [{"id": "price", "title": "Price", "min_value": 0, "max_value": 100}],
            "utilities": {"A": {"price": 1.0}, "B": {"price": 0.5}},
            "method": method,
        }))
        .unwrap()
    }

    #[test]
    fn defaults_to_nash_and_configured_cap() {
        let handler = OptimizeBundlesHandler::new(SolverSettings::default(), 3);
        let result = handler.handle(command(None)).into_success().unwrap();

        assert_eq!(result.method, AggregationMethod::Nash);
        assert!(result.pareto.len() <= 3);
        assert_eq!(result.issue_ids.len(), 1);
    }

    #[test]
    fn explicit_method_is_used() {
        let handler = OptimizeBundlesHandler::new(SolverSettings::default(), 500);
        let result = handler.handle(command(Some("wsw"))).into_success().unwrap();
        assert_eq!(result.method, AggregationMethod::Wsw);
    }

    #[test]
    fn unknown_method_fails_validation() {
        let handler = OptimizeBundlesHandler::new(SolverSettings::default(), 500);
        let envelope = handler.handle(command(Some("utilitarian")));

        let failure = envelope.failure().unwrap();
        assert_eq!(failure.kind, ErrorCode::ValidationFailed);
        assert!(failure.error.contains("utilitarian"));
    }
}
