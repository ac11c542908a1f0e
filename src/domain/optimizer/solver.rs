//! Pareto frontier solver over the discretized issue space.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::frontier::{compact, non_dominated_indices, sort_descending_by};
use super::grid::{issue_grid, weight_vector, weighted_utility, BundleAssignment, PartyWeights};
use super::{AggregationMethod, CombinationGenerator, DEFAULT_COMBINATION_CAP, DEFAULT_GRID_RESOLUTION};
use crate::domain::foundation::{
    ensure_finite, ComputationError, EngineError, IssueId, PartyId, ValidationError,
};
use crate::domain::negotiation::Issue;

/// Default cap on the number of frontier points returned.
pub const DEFAULT_MAX_FRONTIER_POINTS: usize = 500;

/// Party id → per-issue weights.
pub type UtilityWeights = BTreeMap<PartyId, PartyWeights>;

/// Solver tuning taken from engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverSettings {
    pub grid_resolution: usize,
    pub combination_cap: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            combination_cap: DEFAULT_COMBINATION_CAP,
        }
    }
}

/// One optimization problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub issues: Vec<Issue>,
    /// Party id → issue id → weight. Party order in results follows key order.
    pub utilities: UtilityWeights,
    #[serde(default)]
    pub method: AggregationMethod,
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

fn default_max_points() -> usize {
    DEFAULT_MAX_FRONTIER_POINTS
}

/// A scored bundle assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedBundle {
    pub values: BundleAssignment,
    pub party_utilities: BTreeMap<PartyId, f64>,
    /// Aggregate under the requested method.
    pub score: f64,
}

impl EvaluatedBundle {
    /// Sum of all party utilities.
    pub fn total_utility(&self) -> f64 {
        self.party_utilities.values().sum()
    }
}

/// Output of one optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub method: AggregationMethod,
    /// Compacted frontier, summed utility descending.
    pub pareto: Vec<EvaluatedBundle>,
    /// Highest aggregate score among all evaluated bundles.
    pub best: Option<EvaluatedBundle>,
    /// Frontier size before compaction.
    pub frontier_size: usize,
    pub party_ids: Vec<PartyId>,
    pub issue_ids: Vec<IssueId>,
    pub combinations_evaluated: usize,
    /// False when the combination cap cut enumeration short.
    pub exhaustive: bool,
}

impl OptimizationResult {
    /// Recommended value per issue from the best bundle.
    pub fn recommended_values(&self) -> BundleAssignment {
        self.best
            .as_ref()
            .map(|b| b.values.clone())
            .unwrap_or_default()
    }
}

struct Candidate {
    values: Vec<f64>,
    utilities: Vec<f64>,
    score: f64,
}

/// Enumerates, scores and filters bundle assignments.
#[derive(Debug, Clone, Default)]
pub struct ParetoSolver {
    settings: SolverSettings,
}

impl ParetoSolver {
    /// Creates a solver with the given settings.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Returns the solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solves one optimization request.
    ///
    /// # Algorithm
    /// 1. Grid every issue and enumerate up to `combination_cap` bundles
    /// 2. Score each bundle per party and under the requested method
    /// 3. Keep bundles no other bundle dominates
    /// 4. Sort by summed utility (descending) and stride-compact
    /// 5. Best = first bundle with the maximum aggregate score
    ///
    /// # Errors
    /// - `ValidationError` for blank or duplicate ids, or `max_points == 0`
    /// - `ComputationError` for non-finite bounds or weights, or a bundle
    ///   whose utility or score is not finite
    pub fn solve(&self, request: &OptimizationRequest) -> Result<OptimizationResult, EngineError> {
        Self::validate(request)?;

        let issues = &request.issues;
        let grids: Vec<Vec<f64>> = issues
            .iter()
            .map(|issue| issue_grid(issue, self.settings.grid_resolution))
            .collect();

        let party_ids: Vec<PartyId> = request.utilities.keys().cloned().collect();
        let weight_rows: Vec<Vec<f64>> = request
            .utilities
            .values()
            .map(|weights| weight_vector(issues, weights))
            .collect();

        let candidates = CombinationGenerator::new(&grids, self.settings.combination_cap)
            .map(|values| {
                let utilities = weight_rows
                    .iter()
                    .map(|weights| ensure_finite("utility", weighted_utility(issues, weights, &values)))
                    .collect::<Result<Vec<f64>, _>>()?;
                let score = ensure_finite("score", request.method.score(&utilities))?;
                Ok(Candidate {
                    values,
                    utilities,
                    score,
                })
            })
            .collect::<Result<Vec<Candidate>, ComputationError>>()?;

        let utility_rows: Vec<Vec<f64>> = candidates.iter().map(|c| c.utilities.clone()).collect();
        let totals: Vec<f64> = utility_rows.iter().map(|u| u.iter().sum()).collect();

        let mut frontier = non_dominated_indices(&utility_rows);
        sort_descending_by(&mut frontier, &totals);
        let frontier_size = frontier.len();
        let frontier = compact(frontier, request.max_points);

        let materialize = |candidate: &Candidate| EvaluatedBundle {
            values: issues
                .iter()
                .map(|issue| issue.id.clone())
                .zip(candidate.values.iter().copied())
                .collect(),
            party_utilities: party_ids
                .iter()
                .cloned()
                .zip(candidate.utilities.iter().copied())
                .collect(),
            score: candidate.score,
        };

        let best = candidates
            .iter()
            .fold(None::<&Candidate>, |best, candidate| match best {
                Some(current) if candidate.score <= current.score => Some(current),
                _ => Some(candidate),
            })
            .map(materialize);

        Ok(OptimizationResult {
            method: request.method,
            pareto: frontier.iter().map(|&i| materialize(&candidates[i])).collect(),
            best,
            frontier_size,
            party_ids,
            issue_ids: issues.iter().map(|issue| issue.id.clone()).collect(),
            combinations_evaluated: candidates.len(),
            exhaustive: CombinationGenerator::is_exhaustive(&grids, self.settings.combination_cap),
        })
    }

    fn validate(request: &OptimizationRequest) -> Result<(), EngineError> {
        if request.max_points == 0 {
            return Err(ValidationError::invalid_format("max_points", "must be at least 1").into());
        }

        let mut seen = HashSet::new();
        for issue in &request.issues {
            issue.validate()?;
            if !seen.insert(issue.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "issues",
                    format!("duplicate issue id '{}'", issue.id),
                )
                .into());
            }
        }

        for (party_id, weights) in &request.utilities {
            party_id.validate()?;
            for weight in weights.values() {
                ensure_finite("utilities.weight", *weight)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::optimizer::dominates;
    use proptest::prelude::*;

    fn weights(entries: &[(&str, &[(&str, f64)])]) -> UtilityWeights {
        entries
            .iter()
            .map(|(party, issue_weights)| {
                (
                    PartyId::from(*party),
                    issue_weights.iter().map(|(i, w)| (IssueId::from(*i), *w)).collect(),
                )
            })
            .collect()
    }

    fn request(issues: Vec<Issue>, utilities: UtilityWeights, method: AggregationMethod) -> OptimizationRequest {
        OptimizationRequest {
            issues,
            utilities,
            method,
            max_points: DEFAULT_MAX_FRONTIER_POINTS,
        }
    }

    #[test]
    fn wsw_best_beats_midpoint_bundle() {
        let req = request(
            vec![Issue::new("price", "Price", 0.0, 100.0)],
            weights(&[("A", &[("price", 1.0)]), ("B", &[("price", 1.0)])]),
            AggregationMethod::Wsw,
        );

        let result = ParetoSolver::default().solve(&req).unwrap();
        let best = result.best.unwrap();

        // Midpoint bundle (price = 50) gives each party 0.5.
        assert!(best.total_utility() >= 1.0);
        assert_eq!(best.values.get("price"), Some(&100.0));
        assert_eq!(result.combinations_evaluated, 11);
        assert!(result.exhaustive);
    }

    #[test]
    fn independent_interests_collapse_frontier() {
        // A gains with price, B gains with volume. Nothing is traded off.
        let req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("volume", "Volume", 0.0, 10.0),
            ],
            weights(&[("A", &[("price", 1.0)]), ("B", &[("volume", 1.0)])]),
            AggregationMethod::Nash,
        );

        let result = ParetoSolver::default().solve(&req).unwrap();

        // Only (100, 10) is undominated: it maximizes both parties at once.
        assert_eq!(result.frontier_size, 1);
        assert_eq!(result.pareto[0].values.get("price"), Some(&100.0));
        assert_eq!(result.pareto[0].values.get("volume"), Some(&10.0));
    }

    #[test]
    fn frontier_has_no_dominated_pairs() {
        let req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("discount", "Discount", 0.0, 100.0),
            ],
            weights(&[
                ("A", &[("price", 1.0), ("discount", 0.5)]),
                ("B", &[("price", 0.5), ("discount", 1.0)]),
            ]),
            AggregationMethod::Kalai,
        );
        let result = ParetoSolver::default().solve(&req).unwrap();

        for a in &result.pareto {
            for b in &result.pareto {
                let ua: Vec<f64> = a.party_utilities.values().copied().collect();
                let ub: Vec<f64> = b.party_utilities.values().copied().collect();
                assert!(!dominates(&ua, &ub));
            }
        }
    }

    #[test]
    fn frontier_is_sorted_by_total_utility() {
        let req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("term", "Term", 0.0, 10.0),
            ],
            weights(&[
                ("A", &[("price", 1.0), ("term", 0.2)]),
                ("B", &[("price", 0.1), ("term", 1.0)]),
            ]),
            AggregationMethod::Wsw,
        );
        let result = ParetoSolver::default().solve(&req).unwrap();

        let totals: Vec<f64> = result.pareto.iter().map(|b| b.total_utility()).collect();
        assert!(totals.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn frontier_is_compacted_to_max_points() {
        // With no weights every bundle has zero utility for everyone, so
        // nothing dominates anything and all 121 bundles are on the frontier.
        let mut req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("term", "Term", 0.0, 10.0),
            ],
            weights(&[("A", &[]), ("B", &[])]),
            AggregationMethod::Wsw,
        );
        req.max_points = 10;

        let result = ParetoSolver::default().solve(&req).unwrap();
        assert_eq!(result.frontier_size, 121);
        assert_eq!(result.pareto.len(), 10);
        // step = 121 / 10 = 12: first kept point is the first enumerated.
        assert_eq!(result.pareto[0].values.get("price"), Some(&0.0));
        assert_eq!(result.pareto[1].values.get("term"), Some(&1.0));
    }

    #[test]
    fn combination_cap_limits_enumeration() {
        let issues: Vec<Issue> = (0..4)
            .map(|i| Issue::new(format!("i{}", i).as_str(), "issue", 0.0, 10.0))
            .collect();
        let req = request(issues, weights(&[("A", &[("i0", 1.0)])]), AggregationMethod::Nash);

        let result = ParetoSolver::default().solve(&req).unwrap();
        assert_eq!(result.combinations_evaluated, DEFAULT_COMBINATION_CAP);
        assert!(!result.exhaustive);
    }

    #[test]
    fn best_breaks_ties_by_enumeration_order() {
        let req = request(
            vec![Issue::new("price", "Price", 0.0, 100.0)],
            weights(&[("A", &[])]),
            AggregationMethod::Wsw,
        );
        let result = ParetoSolver::default().solve(&req).unwrap();
        assert_eq!(result.best.unwrap().values.get("price"), Some(&0.0));
    }

    #[test]
    fn no_issues_yields_single_empty_bundle() {
        let req = request(Vec::new(), weights(&[("A", &[])]), AggregationMethod::Nash);
        let result = ParetoSolver::default().solve(&req).unwrap();

        assert_eq!(result.combinations_evaluated, 1);
        assert_eq!(result.frontier_size, 1);
        assert!(result.best.unwrap().values.is_empty());
    }

    #[test]
    fn zero_max_points_is_validation_error() {
        let mut req = request(
            vec![Issue::new("price", "Price", 0.0, 100.0)],
            weights(&[("A", &[("price", 1.0)])]),
            AggregationMethod::Nash,
        );
        req.max_points = 0;
        let err = ParetoSolver::default().solve(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn duplicate_issue_ids_are_rejected() {
        let req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("price", "Price again", 0.0, 50.0),
            ],
            weights(&[("A", &[("price", 1.0)])]),
            AggregationMethod::Nash,
        );
        assert!(ParetoSolver::default().solve(&req).is_err());
    }

    #[test]
    fn non_finite_bounds_are_computation_errors() {
        let req = request(
            vec![Issue::new("price", "Price", 0.0, f64::INFINITY)],
            weights(&[("A", &[("price", 1.0)])]),
            AggregationMethod::Nash,
        );
        let err = ParetoSolver::default().solve(&req).unwrap_err();
        assert!(matches!(err, EngineError::Computation(_)));
    }

    #[test]
    fn huge_weights_yield_finite_frontier() {
        let req = request(
            vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("term", "Term", 0.0, 100.0),
            ],
            weights(&[("A", &[("price", 1e308), ("term", 1e308)])]),
            AggregationMethod::Wsw,
        );

        let result = ParetoSolver::default().solve(&req).unwrap();

        assert_eq!(result.frontier_size, 1);
        let best = result.best.unwrap();
        assert_eq!(best.party_utilities.get("A"), Some(&1.0));
        assert!(result
            .pareto
            .iter()
            .flat_map(|bundle| bundle.party_utilities.values())
            .all(|u| (0.0..=1.0).contains(u)));
    }

    #[test]
    fn extreme_bounds_yield_finite_best_bundle() {
        let req = request(
            vec![Issue::new("x", "X", -1e308, 1e308)],
            weights(&[("A", &[("x", 1.0)])]),
            AggregationMethod::Nash,
        );

        let best = ParetoSolver::default().solve(&req).unwrap().best.unwrap();

        assert_eq!(best.values.get("x"), Some(&1e308));
        assert_eq!(best.party_utilities.get("A"), Some(&1.0));
        assert!(best.score.is_finite());
    }

    #[test]
    fn custom_resolution_changes_grid() {
        let solver = ParetoSolver::new(SolverSettings {
            grid_resolution: 3,
            combination_cap: DEFAULT_COMBINATION_CAP,
        });
        let req = request(
            vec![Issue::new("price", "Price", 0.0, 100.0)],
            weights(&[("A", &[("price", 1.0)])]),
            AggregationMethod::Wsw,
        );
        assert_eq!(solver.solve(&req).unwrap().combinations_evaluated, 3);
    }

    proptest! {
        #[test]
        fn frontier_is_mutually_non_dominated(
            raw in prop::collection::vec(prop::collection::vec(-1.0f64..2.0, 2), 1..4),
        ) {
            let issues = vec![
                Issue::new("price", "Price", 0.0, 100.0),
                Issue::new("term", "Term", 0.0, 12.0),
            ];
            let utilities: UtilityWeights = raw
                .iter()
                .enumerate()
                .map(|(p, w)| {
                    (
                        PartyId::from(format!("p{}", p).as_str()),
                        [(IssueId::from("price"), w[0]), (IssueId::from("term"), w[1])]
                            .into_iter()
                            .collect(),
                    )
                })
                .collect();

            let result = ParetoSolver::default()
                .solve(&request(issues, utilities, AggregationMethod::Nash))
                .unwrap();

            prop_assert!(result.pareto.len() <= result.frontier_size);
            for a in &result.pareto {
                for b in &result.pareto {
                    let ua: Vec<f64> = a.party_utilities.values().copied().collect();
                    let ub: Vec<f64> = b.party_utilities.values().copied().collect();
                    prop_assert!(!dominates(&ua, &ub));
                }
            }
        }
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let req: OptimizationRequest = serde_json::from_str(
            r#"{
                "issues": [{"id": "price", "min_value": 0, "max_value": 100}],
                "utilities": {"A": {"price": 1.0}}
            }"#,
        )
        .unwrap();
        assert_eq!(req.method, AggregationMethod::Nash);
        assert_eq!(req.max_points, DEFAULT_MAX_FRONTIER_POINTS);
    }
}
