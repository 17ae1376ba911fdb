//! Outcome rules: win and draw detection over a grid.

pub mod draw;
pub mod win;

pub use win::{WinLine, find_win};

use crate::types::{Grid, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a grid against the win condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell remains.
    InProgress,
    /// A marker completed a line.
    Won(WinLine),
    /// Every cell is occupied and no line was completed.
    Draw,
}

impl Outcome {
    /// Returns the winning marker, if any.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Won(line) => Some(line.marker()),
            _ => None,
        }
    }

    /// Returns true when the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates a grid: winner first, then draw, otherwise in progress.
///
/// A pure function of the grid contents and run length; identical inputs
/// always produce the identical outcome.
#[instrument(skip(grid))]
pub fn outcome(grid: &Grid, win_condition: usize) -> Outcome {
    if let Some(line) = win::find_win(grid, win_condition) {
        Outcome::Won(line)
    } else if draw::is_full(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Grid, Marker};

    #[test]
    fn test_winner_takes_precedence_over_full_board() {
        // A single-row board filled by X is both full and won.
        let mut grid = Grid::new(1, 3);
        for x in 0..3 {
            grid.set(x, 0, Cell::Occupied(Marker::X)).unwrap();
        }

        let result = outcome(&grid, 3);
        assert_eq!(result.winner(), Some(Marker::X));
        assert!(!result.is_draw());
        assert!(result.is_decided());
    }

    #[test]
    fn test_empty_grid_is_in_progress() {
        let grid = Grid::new(3, 3);
        let result = outcome(&grid, 3);
        assert_eq!(result, Outcome::InProgress);
        assert!(!result.is_decided());
    }
}
