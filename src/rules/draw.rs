//! Draw detection: a full grid with no completed line.

use crate::types::{Cell, Grid};
use tracing::instrument;

/// Checks if every cell on the grid is occupied.
///
/// A full grid with no winner is a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| *cell != Cell::Empty)
}
