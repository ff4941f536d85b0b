use crate::foundation::core::GridPos;
use crate::grid::Grid;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// Ordered cells the sprite visits, richest tier first.
///
/// Consecutive entries are not adjacent in general; the sprite teleports between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitPath {
    steps: Vec<GridPos>,
}

impl VisitPath {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when there is nothing to visit.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Coordinate visited at `step`.
    pub fn get(&self, step: usize) -> Option<GridPos> {
        self.steps.get(step).copied()
    }

    /// Steps in visiting order.
    pub fn steps(&self) -> &[GridPos] {
        &self.steps
    }
}

/// Order every active cell by descending tier.
///
/// Tie order is decided by one shuffle before a stable sort, so `rng` is the only source of
/// run-to-run variation.
#[tracing::instrument(skip(grid, rng))]
pub fn plan_path<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> VisitPath {
    let mut cells: Vec<_> = grid.iter().filter(|(_, t)| t.is_active()).collect();
    cells.shuffle(rng);
    cells.sort_by_key(|&(_, tier)| Reverse(tier));

    let steps: Vec<GridPos> = cells.into_iter().map(|(pos, _)| pos).collect();
    tracing::debug!(steps = steps.len(), "planned visit path");
    VisitPath { steps }
}

#[cfg(test)]
#[path = "../../tests/unit/path/planner.rs"]
mod tests;
