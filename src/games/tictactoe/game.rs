//! Game state for tic-tac-toe.
//!
//! [`GameState`] holds the board and the mark due to move. It changes only
//! through [`GameState::apply_move`] (or its checked form
//! [`GameState::try_apply_move`]) and [`GameState::restart`]. The outcome
//! is never stored; it is recomputed from the board on demand.

use super::action::MoveError;
use super::invariants::{self, InvariantSet, TicTacToeInvariants};
use super::rules::compute_outcome;
use super::types::{Board, Mark};
use super::{Outcome, Position, PositionParseError, Status};
use tracing::{debug, instrument, warn};

/// Board plus whose turn it is.
///
/// Only reachable states can be built: start from [`GameState::new`] and
/// play moves. Export a view with [`Snapshot`](super::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
    next: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
        }
    }

    /// Builds a game by applying indices in order, skipping rejected moves.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index);
        }
        game
    }

    /// Builds a game from cell names, as typed on the command line.
    ///
    /// Each entry is an index `0`-`8` or a label like `center`. Legal
    /// moves are played in order and rejected ones are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first entry that names no cell; no moves are played then.
    #[instrument(skip_all, fields(moves = moves.len()))]
    pub fn replay_labels<S: AsRef<str>>(moves: &[S]) -> Result<Self, PositionParseError> {
        let positions = moves
            .iter()
            .map(|m| Position::from_label_or_number(m.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut game = Self::new();
        for pos in positions {
            if let Err(e) = game.play(pos) {
                warn!(position = %pos, reason = %e, "Move skipped");
            }
        }
        Ok(game)
    }

    /// Assembles a state without checking it is reachable.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, next: Mark) -> Self {
        Self { board, next }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn next_mark(&self) -> Mark {
        self.next
    }

    /// Computes the outcome from the current board.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    /// Returns the status line for the current state.
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.next)
    }

    /// Plays the current mark at `index` if the move is legal.
    ///
    /// Illegal moves (out of bounds, occupied square, finished game) leave
    /// the state untouched.
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move(index) {
            debug!(index, reason = %e, "Move ignored");
        }
    }

    /// Plays the current mark at `index`, returning the mark placed.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the state untouched if the index
    /// is out of bounds, the square is occupied, or the game has ended.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Mark, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Plays the current mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::try_apply_move`], minus the bounds check.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn play(&mut self, pos: Position) -> Result<Mark, MoveError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(MoveError::GameOver(outcome));
        }

        let before = self.board.clone();

        let mark = self.next;
        if !self.board.place(pos, mark) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.next = mark.opponent();

        debug_assert!(
            invariants::is_single_placement(&before, &self.board, mark),
            "Move changed more than one square"
        );
        debug_assert!(TicTacToeInvariants::check_all(&*self).is_ok());

        debug!(%mark, position = %pos, "Move applied");
        Ok(mark)
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
        debug!("Game restarted");
    }
}
