//! Projection of daily records onto the fixed week-by-weekday grid.

use crate::activity::record::ActivityRecord;
use crate::foundation::core::{GridPos, Tier};

/// Day-of-week rows.
pub const GRID_ROWS: usize = 7;
/// Week columns.
pub const GRID_COLS: usize = 53;
/// Number of trailing records the grid can hold.
pub const GRID_CAPACITY: usize = GRID_ROWS * GRID_COLS;

/// Fixed 7 x 53 matrix of tiers, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Tier; GRID_COLS]; GRID_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [[Tier::ZERO; GRID_COLS]; GRID_ROWS],
        }
    }
}

impl Grid {
    /// Lay out the last [`GRID_CAPACITY`] records column by column: record `i` lands at
    /// `row = i % 7`, `col = i / 7`. Missing trailing cells stay at tier zero.
    #[tracing::instrument(skip(records), fields(records = records.len()))]
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let tail = &records[records.len().saturating_sub(GRID_CAPACITY)..];
        let mut grid = Self::default();
        for (i, record) in tail.iter().enumerate() {
            let (row, col) = (i % GRID_ROWS, i / GRID_ROWS);
            if col < GRID_COLS {
                grid.cells[row][col] = record.tier();
            }
        }
        tracing::debug!(active = grid.count_active(), "built grid");
        grid
    }

    /// Number of rows (always [`GRID_ROWS`]).
    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    /// Number of columns (always [`GRID_COLS`]).
    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    /// Tier at `pos`; out-of-range coordinates read as tier zero.
    pub fn tier(&self, pos: GridPos) -> Tier {
        self.cells
            .get(usize::from(pos.row))
            .and_then(|row| row.get(usize::from(pos.col)))
            .copied()
            .unwrap_or(Tier::ZERO)
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Tier)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &tier)| (GridPos::new(r as u8, c as u8), tier))
        })
    }

    /// Number of cells with a tier above zero.
    pub fn count_active(&self) -> usize {
        self.iter().filter(|(_, t)| t.is_active()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/grid.rs"]
mod tests;
