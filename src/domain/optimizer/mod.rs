//! Pareto bundle optimizer.
//!
//! Discretizes every issue into a grid, enumerates bundle assignments up to a
//! fixed budget, scores each bundle per party and under an aggregation method,
//! and reports the non-dominated set together with the best-scoring bundle.
//!
//! The search is a bounded heuristic: when the product space exceeds the
//! combination cap, only the first `cap` assignments in enumeration order are
//! considered and the result is flagged as non-exhaustive.

mod aggregation;
mod combinations;
mod frontier;
mod grid;
mod solver;

pub use aggregation::{AggregationMethod, NASH_UTILITY_FLOOR};
pub use combinations::{CombinationGenerator, DEFAULT_COMBINATION_CAP};
pub use frontier::{compact, dominates, non_dominated_indices};
pub use grid::{issue_grid, party_utility, BundleAssignment, PartyWeights, DEFAULT_GRID_RESOLUTION};
pub use solver::{
    EvaluatedBundle, OptimizationRequest, OptimizationResult, ParetoSolver, SolverSettings,
    UtilityWeights, DEFAULT_MAX_FRONTIER_POINTS,
};
