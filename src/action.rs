//! Move records for Big-Tac-Toe.
//!
//! Moves are domain events, not side effects: each one records where a
//! marker landed and its place in the game, so any board state can be
//! replayed or inspected from the log alone.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// A single recorded move: a marker placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column of the placed marker.
    pub x: usize,
    /// Row of the placed marker.
    pub y: usize,
    /// The marker that was placed.
    pub marker: Marker,
    /// 1-based sequence number of this move; 0 is reserved for the empty
    /// board.
    pub ordinal: usize,
}

impl Move {
    /// Creates a new move record.
    pub fn new(x: usize, y: usize, marker: Marker, ordinal: usize) -> Self {
        Self {
            x,
            y,
            marker,
            ordinal,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at column {}, row {}", self.marker, self.x, self.y)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a marker.
    #[display("cell ({}, {}) is already occupied", _0, _1)]
    CellOccupied(usize, usize),

    /// The game already has a winner or ended in a draw.
    #[display("the game is already decided")]
    GameDecided,

    /// The coordinates lie outside the grid.
    #[display("cell ({}, {}) is outside the grid", _0, _1)]
    OutOfBounds(usize, usize),
}

impl std::error::Error for MoveError {}
