//! Mark balance invariant: X is never behind O, and never two ahead.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and marks alternate.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}
