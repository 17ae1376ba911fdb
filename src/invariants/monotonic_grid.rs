//! Monotonic grid: snapshots only ever add markers.

use super::Invariant;
use crate::history::Game;
use crate::types::Cell;

/// Invariant: each snapshot extends its predecessor by exactly the
/// recorded move; placed markers are never erased or overwritten.
pub struct MonotonicGridInvariant;

impl Invariant<Game> for MonotonicGridInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let mov = match after.last_move() {
                Some(mov) => *mov,
                None => return false,
            };

            if !before.grid().is_empty(mov.x, mov.y) {
                return false;
            }
            if after.grid().get(mov.x, mov.y) != Some(Cell::Occupied(mov.marker)) {
                return false;
            }

            // Every other cell is carried over unchanged.
            for y in 0..before.grid().rows() {
                for x in 0..before.grid().columns() {
                    if (x, y) == (mov.x, mov.y) {
                        continue;
                    }
                    if before.grid().get(x, y) != after.grid().get(x, y) {
                        return false;
                    }
                }
            }
            true
        })
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly one placed marker"
    }
}
