//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so the outcome can always be recomputed instead of stored.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// A win is tested before a draw, so a board completed by a winning move
/// reports the winner.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
