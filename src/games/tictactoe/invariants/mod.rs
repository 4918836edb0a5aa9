//! Invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold for every reachable
//! [`GameState`]. They are checked with `debug_assert!` after each move and
//! can be tested independently.
//!
//! [`GameState`]: super::GameState

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::warn!(?violations, "Invariants violated");
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod monotonic_board;
pub mod turn_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::is_single_placement;
pub use turn_consistent::TurnConsistentInvariant;

/// All tic-tac-toe state invariants as a composable set.
pub type TicTacToeInvariants = (MarkBalanceInvariant, TurnConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameState, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameState::replay(&[0, 4, 2, 6]);
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two more Os than Xs: unbalanced, and no valid next mark.
        let board: Board = "OO. ... ...".parse().unwrap();
        let game = GameState::from_parts(board, Mark::X);

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkBalanceInvariant::description());
    }
}
