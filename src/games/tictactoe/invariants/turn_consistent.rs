//! Turn consistency invariant: the mark to move follows from the board.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X moves next exactly when both marks have been played
/// equally often.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        game.next_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate, starting with X"
    }
}
