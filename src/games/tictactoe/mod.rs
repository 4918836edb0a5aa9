//! Tic-tac-toe game state, rules and invariants.

mod action;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Action, MoveError};
pub use game::GameState;
pub use outcome::{Outcome, Status};
pub use position::{Position, PositionParseError};
pub use rules::compute_outcome;
pub use snapshot::Snapshot;
pub use types::{Board, BoardParseError, Mark, SQUARES, Square};
