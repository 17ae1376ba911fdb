//! Alternating marks: X moves on even indices, O on odd.

use super::Invariant;
use crate::history::Game;
use crate::types::Marker;
use strum::IntoEnumIterator;

/// Invariant: recorded moves alternate markers starting with X, and the
/// marker counts on the latest board split the moves played accordingly.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        let alternating = game
            .history()
            .iter()
            .skip(1)
            .all(|snapshot| match snapshot.last_move() {
                Some(mov) => {
                    mov.ordinal >= 1
                        && mov.ordinal == snapshot.ordinal()
                        && mov.marker == Marker::for_turn(mov.ordinal - 1)
                }
                None => false,
            });
        if !alternating {
            return false;
        }

        // On the latest snapshot the markers split the moves played:
        // X takes the odd ordinals, O the even ones.
        let last = match game.history().last() {
            Some(snapshot) => snapshot,
            None => return false,
        };
        Marker::iter().all(|marker| {
            let expected = match marker {
                Marker::X => last.ordinal().div_ceil(2),
                Marker::O => last.ordinal() / 2,
            };
            last.grid().count(marker) == expected
        })
    }

    fn description() -> &'static str {
        "Moves alternate markers starting with X"
    }
}
