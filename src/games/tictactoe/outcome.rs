//! Derived game outcome and status line.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a board.
///
/// Never stored on the game state: always recomputed from the board by
/// [`compute_outcome`](super::rules::compute_outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A mark holds three in a row.
    Winner(Mark),
    /// The board is full with no three in a row.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Text shown on the status line.
///
/// A draw is reported through the winner line as `Winner: No one!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Game won.
    #[display("Winner: {}", _0)]
    Winner(Mark),

    /// Game drawn.
    #[display("Winner: No one!")]
    Draw,

    /// Game in progress, `_0` to move.
    #[display("Next Player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Builds the status for an outcome and the mark due to move.
    pub fn new(outcome: Outcome, next: Mark) -> Self {
        match outcome {
            Outcome::Winner(mark) => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::new(Outcome::Winner(Mark::O), Mark::X).to_string(), "Winner: O");
        assert_eq!(Status::new(Outcome::Draw, Mark::O).to_string(), "Winner: No one!");
        assert_eq!(
            Status::new(Outcome::InProgress, Mark::O).to_string(),
            "Next Player: O"
        );
    }

    #[test]
    fn test_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Winner(Mark::X).is_terminal());
    }
}
