//! Game sessions: the snapshot log, time travel, and derived views.

use crate::action::{Move, MoveError};
use crate::config::GameConfig;
use crate::rules::Outcome;
use crate::snapshot::Snapshot;
use crate::types::{Grid, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error navigating the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested index does not name a recorded snapshot.
    #[display("history index {} is out of range (0..{})", index, len)]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

/// Presentation order for the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

/// One entry in the move-list projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Index of the snapshot this entry navigates to.
    pub index: usize,
    /// The move that produced the snapshot, absent for the game start.
    pub played: Option<Move>,
    /// Whether this entry is the currently selected snapshot.
    pub is_current: bool,
}

impl MoveEntry {
    /// Navigation label for this entry.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Derived view
// ─────────────────────────────────────────────────────────────

/// Read-only composite view of the selected snapshot.
///
/// Everything here is derived from the log and the cursor; nothing is
/// stored independently, so the view can never fall out of sync with the
/// history.
#[derive(Debug, Clone)]
pub struct GameView<'a> {
    snapshot: &'a Snapshot,
    index: usize,
    outcome: Outcome,
}

impl<'a> GameView<'a> {
    /// The selected snapshot.
    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    /// The selected snapshot's grid.
    pub fn grid(&self) -> &'a Grid {
        self.snapshot.grid()
    }

    /// Index of the selected snapshot in the history.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Outcome recomputed for the selected snapshot.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Marker to move at the selected snapshot.
    pub fn to_move(&self) -> Marker {
        self.snapshot.to_move()
    }

    /// Cells to highlight when the selected snapshot is won.
    pub fn winning_cells(&self) -> Option<&[(usize, usize)]> {
        match &self.outcome {
            Outcome::Won(line) => Some(line.cells()),
            _ => None,
        }
    }

    /// Status line for the selected snapshot.
    pub fn status(&self) -> String {
        match &self.outcome {
            Outcome::Won(line) => format!("Winner: {}", line.marker()),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// A Big-Tac-Toe session: configuration, snapshot log, and cursor.
///
/// The log always starts with the empty board, every later snapshot is
/// one move ahead of its predecessor, and the cursor selects the snapshot
/// that play continues from. Recording a move while the cursor sits in
/// the past truncates the abandoned branch first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current: usize,
}

impl Game {
    /// Creates a session from a validated configuration.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        info!(
            rows = config.rows(),
            columns = config.columns(),
            win_condition = config.win_condition(),
            "Creating new game"
        );
        Self {
            history: vec![Snapshot::initial(&config)],
            current: 0,
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the selected snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Records a move at `(x, y)` against the selected snapshot.
    ///
    /// On success the log is truncated to the selected snapshot before the
    /// new one is appended, so playing from a past point abandons the
    /// branch that followed it. A rejected move leaves the log and cursor
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from the move engine: occupied cell,
    /// decided game, or out-of-range coordinates.
    #[instrument(skip(self))]
    pub fn record_move(&mut self, x: usize, y: usize) -> Result<GameView<'_>, MoveError> {
        let next = match self.history[self.current].apply_move(&self.config, x, y) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, x, y, "Move rejected");
                return Err(err);
            }
        };

        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;
        debug!(index = self.current, "Move recorded");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.current())
    }

    /// Selects the snapshot at `index` without altering the log.
    ///
    /// Navigating backward out of a decided game is expected; play
    /// resumes from the selected snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] when `index` does not
    /// name a recorded snapshot. That is a bug in the calling layer, not
    /// a user-triggerable condition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<GameView<'_>, HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current, to = index, "Jumping through history");
        self.current = index;
        Ok(self.current())
    }

    /// Read-only view of the selected snapshot and its derived state.
    pub fn current(&self) -> GameView<'_> {
        let snapshot = &self.history[self.current];
        GameView {
            snapshot,
            index: self.current,
            outcome: snapshot.outcome(self.config.win_condition()),
        }
    }

    /// The move list in the requested order.
    ///
    /// A pure projection over the log: re-derivable at any time, and it
    /// never touches the cursor or the snapshots.
    pub fn moves(&self, order: SortOrder) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                played: snapshot.last_move().copied(),
                is_current: index == self.current,
            });
        match order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions: Vec<_> = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect();
            debug_assert!(
                false,
                "Game invariants violated: {}",
                descriptions.join("; ")
            );
        }
    }
}
