//! History consistency: ordinals, occupancy counts, and the cursor line
//! up.

use super::Invariant;
use crate::history::Game;
use crate::types::Cell;

/// Invariant: each snapshot's ordinal equals its index and its
/// occupied-cell count, and the cursor points at a recorded snapshot.
///
/// Every move in the log corresponds to exactly one occupied cell; no
/// moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        if game.current_index() >= game.history().len() {
            return false;
        }

        game.history().iter().enumerate().all(|(index, snapshot)| {
            let occupied = snapshot
                .grid()
                .cells()
                .iter()
                .filter(|cell| **cell != Cell::Empty)
                .count();
            snapshot.ordinal() == index && occupied == index
        })
    }

    fn description() -> &'static str {
        "Snapshot ordinals match their indices and occupied-cell counts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new(GameConfig::default());
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = Game::new(GameConfig::default());
        game.record_move(0, 0).unwrap();
        game.record_move(1, 1).unwrap();
        game.jump_to(1).unwrap();

        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_duplicated_snapshot_violates() {
        let mut game = Game::new(GameConfig::default());
        game.record_move(0, 0).unwrap();

        game.history.push(game.history[1].clone());
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut game = Game::new(GameConfig::default());
        game.record_move(0, 0).unwrap();

        game.current = 5;
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
