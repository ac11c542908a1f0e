//! Capped Cartesian-product generator over per-issue grids.

/// Maximum number of bundle assignments evaluated per optimization.
pub const DEFAULT_COMBINATION_CAP: usize = 5_000;

/// Iterates the Cartesian product of `grids`, stopping after `cap` items.
///
/// Enumeration order is depth-first: the last grid varies fastest, the
/// first slowest. The generator owns its remaining budget, so independent
/// generators never interfere. Build a new one to restart from scratch.
#[derive(Debug, Clone)]
pub struct CombinationGenerator<'a> {
    grids: &'a [Vec<f64>],
    cursor: Vec<usize>,
    remaining: usize,
    exhausted: bool,
}

impl<'a> CombinationGenerator<'a> {
    /// Creates a generator with the given budget.
    pub fn new(grids: &'a [Vec<f64>], cap: usize) -> Self {
        Self {
            grids,
            cursor: vec![0; grids.len()],
            remaining: cap,
            exhausted: grids.iter().any(|g| g.is_empty()),
        }
    }

    /// Full size of the product space, or `None` on overflow.
    pub fn product_size(grids: &[Vec<f64>]) -> Option<usize> {
        grids.iter().try_fold(1usize, |acc, g| acc.checked_mul(g.len()))
    }

    /// Returns true if the cap covers the whole product space.
    pub fn is_exhaustive(grids: &[Vec<f64>], cap: usize) -> bool {
        Self::product_size(grids).is_some_and(|size| size <= cap)
    }

    fn advance(&mut self) {
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.grids[pos].len() {
                return;
            }
            self.cursor[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CombinationGenerator<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.remaining == 0 {
            return None;
        }

        let combo = self
            .cursor
            .iter()
            .zip(self.grids)
            .map(|(&i, grid)| grid[i])
            .collect();

        self.remaining -= 1;
        self.advance();
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        (0, Some(self.remaining))
    }
}
