//! Dominance ordering, frontier extraction and compaction.

use std::cmp::Ordering;

/// Checks if utility vector `a` dominates `b`.
///
/// A dominates B if:
/// 1. A >= B for EVERY party
/// 2. A > B for AT LEAST ONE party
///
/// This is a strict partial order: irreflexive, asymmetric and transitive.
/// Vectors are compared position by position and must share a party order.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better_on_one = false;

    for (ua, ub) in a.iter().zip(b) {
        if ua < ub {
            return false;
        }
        if ua > ub {
            strictly_better_on_one = true;
        }
    }

    strictly_better_on_one
}

/// Indices of the vectors not dominated by any other vector.
///
/// Pairwise O(n²) check. Identical vectors do not dominate each other, so
/// duplicates all survive. Indices are returned in input order.
pub fn non_dominated_indices(utilities: &[Vec<f64>]) -> Vec<usize> {
    (0..utilities.len())
        .filter(|&i| {
            !utilities
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && dominates(other, &utilities[i]))
        })
        .collect()
}

/// Stable sort of indices by `key`, highest first.
pub(crate) fn sort_descending_by(indices: &mut [usize], key: &[f64]) {
    indices.sort_by(|&a, &b| key[b].partial_cmp(&key[a]).unwrap_or(Ordering::Equal));
}

/// Uniform stride sampling down to at most `max_points` items.
///
/// `step = max(1, len / max_points)`; every step-th item is kept and the
/// result truncated. Deterministic for a fixed input.
pub fn compact<T>(items: Vec<T>, max_points: usize) -> Vec<T> {
    if items.len() <= max_points {
        return items;
    }

    let step = (items.len() / max_points.max(1)).max(1);
    items.into_iter().step_by(step).take(max_points).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_requires_strict_improvement() {
        assert!(dominates(&[0.6, 0.5], &[0.5, 0.5]));
        assert!(!dominates(&[0.5, 0.5], &[0.5, 0.5]));
        assert!(!dominates(&[0.9, 0.1], &[0.1, 0.9]));
    }

    #[test]
    fn dominance_is_irreflexive_and_asymmetric() {
        let a = [0.7, 0.4, 0.2];
        let b = [0.6, 0.4, 0.1];
        assert!(!dominates(&a, &a));
        assert!(dominates(&a, &b));
        assert!(!dominates(&b, &a));
    }

    #[test]
    fn dominance_is_transitive() {
        let a = [0.9, 0.9];
        let b = [0.8, 0.9];
        let c = [0.8, 0.7];
        assert!(dominates(&a, &b) && dominates(&b, &c));
        assert!(dominates(&a, &c));
    }

    #[test]
    fn frontier_drops_dominated_points() {
        let utilities = vec![
            vec![1.0, 0.0],
            vec![0.5, 0.5],
            vec![0.4, 0.4],
            vec![0.0, 1.0],
        ];
        assert_eq!(non_dominated_indices(&utilities), vec![0, 1, 3]);
    }

    #[test]
    fn frontier_keeps_duplicates() {
        let utilities = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
        assert_eq!(non_dominated_indices(&utilities), vec![0, 1]);
    }

    #[test]
    fn frontier_of_nothing_is_empty() {
        assert!(non_dominated_indices(&[]).is_empty());
    }

    #[test]
    fn sort_descending_is_stable() {
        let key = [0.5, 0.9, 0.5, 0.1];
        let mut indices = vec![0, 1, 2, 3];
        sort_descending_by(&mut indices, &key);
        assert_eq!(indices, vec![1, 0, 2, 3]);
    }

    #[test]
    fn compact_leaves_small_inputs_alone() {
        assert_eq!(compact(vec![1, 2, 3], 5), vec![1, 2, 3]);
    }

    #[test]
    fn compact_uses_uniform_stride() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(compact(items, 3), vec![0, 3, 6]);

        let items: Vec<usize> = (0..7).collect();
        // step = 7 / 3 = 2 -> 0, 2, 4, 6 -> truncated to 3
        assert_eq!(compact(items, 3), vec![0, 2, 4]);
    }
}
