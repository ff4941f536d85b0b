//! Visiting order over the grid and the set of cells already eaten.

pub(crate) mod planner;
pub(crate) mod visited;
