//! Big-Tac-Toe game engine.
//!
//! Pure game logic for a tic-tac-toe variant with configurable board
//! dimensions and an arbitrary N-in-a-row win condition: board
//! representation, move application, win and draw detection, and a move
//! history that supports time travel.
//!
//! # Architecture
//!
//! - **Move engine**: [`Snapshot::apply_move`] applies a legal move to an
//!   immutable snapshot, producing the next snapshot.
//! - **Win detector**: [`rules::outcome`] evaluates a grid against the
//!   win condition, reporting the winning line or a draw.
//! - **History manager**: [`Game`] owns the snapshot log, records moves
//!   with branch-and-truncate semantics, and navigates to any index.
//!
//! The crate performs no I/O; rendering and input handling belong to the
//! caller.
//!
//! # Example
//!
//! ```
//! use big_tac_toe::{Game, GameConfig, Marker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::parse("3", "3", "3")?;
//! let mut game = Game::new(config);
//!
//! game.record_move(0, 0)?; // X
//! game.record_move(1, 1)?; // O
//! assert_eq!(game.current().to_move(), Marker::X);
//!
//! // Time travel back to the empty board; the log is untouched.
//! game.jump_to(0)?;
//! assert_eq!(game.history().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod history;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Sessions and views
pub use history::{Game, GameView, HistoryError, MoveEntry, SortOrder};

// Crate-level exports - Outcomes
pub use rules::{Outcome, WinLine};

// Crate-level exports - Board state
pub use snapshot::Snapshot;
pub use types::{Cell, Grid, Marker};
