//! Issue discretization and party utility.

use std::collections::BTreeMap;

use crate::domain::foundation::{IssueId, ValidationError};
use crate::domain::negotiation::Issue;

/// Number of grid points per issue unless configured otherwise.
pub const DEFAULT_GRID_RESOLUTION: usize = 11;

/// Issue id → assigned value for one candidate bundle.
pub type BundleAssignment = BTreeMap<IssueId, f64>;

/// Issue id → relevance weight for one party.
pub type PartyWeights = BTreeMap<IssueId, f64>;

/// Evenly spaced sample points spanning `[min_value, max_value]`.
///
/// # Edge Cases
/// - Resolution 0: empty grid
/// - Resolution 1: just the minimum
/// - Reversed bounds: points run from min down to max
/// - Bounds near `f64::MAX`: points are interpolated, never `max - min`
pub fn issue_grid(issue: &Issue, resolution: usize) -> Vec<f64> {
    match resolution {
        0 => Vec::new(),
        1 => vec![issue.min_value],
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    issue.min_value * (1.0 - t) + issue.max_value * t
                })
                .collect()
        }
    }
}

/// A party's weights laid out in issue order, negatives clamped to zero.
///
/// Weights are divided by the party's largest weight so their sum stays
/// finite; the weighted mean is unchanged.
pub(crate) fn weight_vector(issues: &[Issue], weights: &PartyWeights) -> Vec<f64> {
    let raw: Vec<f64> = issues
        .iter()
        .map(|issue| weights.get(&issue.id).copied().unwrap_or(0.0).max(0.0))
        .collect();

    let largest = raw.iter().copied().fold(0.0, f64::max);
    if largest > 0.0 {
        raw.into_iter().map(|w| w / largest).collect()
    } else {
        raw
    }
}

/// Weighted mean of normalized values, with `values` aligned to `issues`.
///
/// Returns 0 when the weight sum is 0.
pub(crate) fn weighted_utility(issues: &[Issue], weights: &[f64], values: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for ((issue, &weight), &value) in issues.iter().zip(weights).zip(values) {
        total += weight * issue.normalize(value);
        weight_sum += weight;
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

/// Computes a party's normalized utility for a value assignment.
///
/// Every issue must have a value in the assignment.
pub fn party_utility(
    issues: &[Issue],
    weights: &PartyWeights,
    assignment: &BundleAssignment,
) -> Result<f64, ValidationError> {
    let values = issues
        .iter()
        .map(|issue| {
            assignment.get(&issue.id).copied().ok_or_else(|| {
                ValidationError::invalid_format(
                    "assignment",
                    format!("missing value for issue '{}'", issue.id),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(weighted_utility(issues, &weight_vector(issues, weights), &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price() -> Issue {
        Issue::new("price", "Price", 0.0, 100.0)
    }

    fn weights(entries: &[(&str, f64)]) -> PartyWeights {
        entries.iter().map(|(id, w)| (IssueId::from(*id), *w)).collect()
    }

    #[test]
    fn grid_has_eleven_even_points() {
        let grid = issue_grid(&price(), DEFAULT_GRID_RESOLUTION);
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[5], 50.0);
        assert_eq!(grid[10], 100.0);
    }

    #[test]
    fn grid_edge_resolutions() {
        assert!(issue_grid(&price(), 0).is_empty());
        assert_eq!(issue_grid(&price(), 1), vec![0.0]);
    }

    #[test]
    fn utility_is_weighted_mean_of_normalized_values() {
        let issues = vec![price(), Issue::new("volume", "Volume", 0.0, 10.0)];
        let assignment: BundleAssignment =
            [(IssueId::from("price"), 100.0), (IssueId::from("volume"), 0.0)].into_iter().collect();

        let u = party_utility(&issues, &weights(&[("price", 3.0), ("volume", 1.0)]), &assignment).unwrap();
        assert!((u - 0.75).abs() < 1e-12);
    }

    #[test]
    fn utility_zero_when_no_weights() {
        let issues = vec![price()];
        let assignment: BundleAssignment = [(IssueId::from("price"), 80.0)].into_iter().collect();
        assert_eq!(party_utility(&issues, &PartyWeights::new(), &assignment).unwrap(), 0.0);
    }

    #[test]
    fn utility_ignores_negative_weights() {
        let issues = vec![price(), Issue::new("volume", "Volume", 0.0, 10.0)];
        let assignment: BundleAssignment =
            [(IssueId::from("price"), 100.0), (IssueId::from("volume"), 0.0)].into_iter().collect();
        let u = party_utility(&issues, &weights(&[("price", 1.0), ("volume", -5.0)]), &assignment).unwrap();
        assert_eq!(u, 1.0);
    }

    #[test]
    fn huge_weights_keep_utility_finite() {
        let issues = vec![price(), Issue::new("term", "Term", 0.0, 100.0)];
        let assignment: BundleAssignment =
            [(IssueId::from("price"), 100.0), (IssueId::from("term"), 50.0)].into_iter().collect();

        let u = party_utility(&issues, &weights(&[("price", 1e308), ("term", 1e308)]), &assignment).unwrap();
        assert!((u - 0.75).abs() < 1e-12);
    }

    #[test]
    fn grid_spans_extreme_bounds_without_overflow() {
        let wide = Issue::new("x", "X", -1e308, 1e308);
        let grid = issue_grid(&wide, 3);
        assert_eq!(grid, vec![-1e308, 0.0, 1e308]);
        assert!(grid.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn utility_requires_every_issue_value() {
        let issues = vec![price()];
        let result = party_utility(&issues, &weights(&[("price", 1.0)]), &BundleAssignment::new());
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn utility_stays_in_unit_interval(
            lo in -1000.0f64..1000.0,
            width in 0.0f64..1000.0,
            fractions in prop::collection::vec(0.0f64..=1.0, 1..5),
            raw_weights in prop::collection::vec(0.0f64..=f64::MAX, 5),
        ) {
            let issues: Vec<Issue> = (0..fractions.len())
                .map(|i| Issue::new(format!("i{}", i).as_str(), "issue", lo, lo + width))
                .collect();
            let assignment: BundleAssignment = issues
                .iter()
                .zip(&fractions)
                .map(|(issue, f)| (issue.id.clone(), lo + width * f))
                .collect();
            let party_weights: PartyWeights = issues
                .iter()
                .zip(&raw_weights)
                .map(|(issue, w)| (issue.id.clone(), *w))
                .collect();

            let u = party_utility(&issues, &party_weights, &assignment).unwrap();
            prop_assert!((0.0..=1.0 + 1e-9).contains(&u), "utility {} out of range", u);
        }
    }
}
