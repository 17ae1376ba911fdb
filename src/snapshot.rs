//! Immutable board snapshots and move application.

use crate::action::{Move, MoveError};
use crate::config::GameConfig;
use crate::rules::{self, Outcome};
use crate::types::{Cell, Grid, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An immutable grid state after applying `ordinal` moves.
///
/// Snapshots are the unit of history: applying a move produces a new
/// snapshot with its own grid and leaves the original untouched, so
/// holders of earlier snapshots never observe a retroactive change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) grid: Grid,
    pub(crate) ordinal: usize,
    pub(crate) last_move: Option<Move>,
}

impl Snapshot {
    /// The empty board before any move.
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            grid: Grid::new(config.rows(), config.columns()),
            ordinal: 0,
            last_move: None,
        }
    }

    /// The grid after `ordinal` moves.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves applied to reach this snapshot.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The move that produced this snapshot, absent on the initial board.
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Marker whose turn it is at this snapshot, derived from ordinal
    /// parity.
    pub fn to_move(&self) -> Marker {
        Marker::for_turn(self.ordinal)
    }

    /// Evaluates this snapshot's grid against the win condition.
    pub fn outcome(&self, win_condition: usize) -> Outcome {
        rules::outcome(&self.grid, win_condition)
    }

    /// Applies a move at `(x, y)`, returning the resulting snapshot.
    ///
    /// The marker placed is the one whose turn it is here. The input
    /// snapshot is never mutated.
    ///
    /// # Errors
    ///
    /// Rejects the move when the game is already decided, the target cell
    /// is occupied, or the coordinates fall outside the grid.
    #[instrument(skip(self, config), fields(ordinal = self.ordinal))]
    pub fn apply_move(&self, config: &GameConfig, x: usize, y: usize) -> Result<Self, MoveError> {
        if self.outcome(config.win_condition()).is_decided() {
            return Err(MoveError::GameDecided);
        }
        match self.grid.get(x, y) {
            None => return Err(MoveError::OutOfBounds(x, y)),
            Some(Cell::Occupied(_)) => return Err(MoveError::CellOccupied(x, y)),
            Some(Cell::Empty) => {}
        }

        let marker = self.to_move();
        let ordinal = self.ordinal + 1;
        let mut grid = self.grid.clone();
        grid.set(x, y, Cell::Occupied(marker))
            .map_err(|_| MoveError::OutOfBounds(x, y))?;

        Ok(Self {
            grid,
            ordinal,
            last_move: Some(Move::new(x, y, marker, ordinal)),
        })
    }
}
