use crate::foundation::core::GridPos;
use std::collections::HashSet;

/// Cells the sprite has already eaten. Grows monotonically; there is no way to remove a cell.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    cells: HashSet<GridPos>,
}

impl VisitedSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `pos` as eaten. Returns `false` if it already was.
    pub fn visit(&mut self, pos: GridPos) -> bool {
        self.cells.insert(pos)
    }

    /// `true` if `pos` has been eaten.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of eaten cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` before the first visit.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if every cell of `self` is also in `other`.
    pub fn is_subset(&self, other: &VisitedSet) -> bool {
        self.cells.is_subset(&other.cells)
    }
}
