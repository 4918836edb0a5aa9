//! User actions and move rejections.

use super::{Outcome, Position};

/// A single user interaction delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A cell was clicked.
    CellClicked(Position),
    /// The restart button was clicked.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::CellClicked(pos) => write!(f, "click {}", pos.label()),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// Reason a move was not applied.
///
/// Rejected moves never change the game; these values only explain why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
