//! Tic-tac-toe: game state, rules and a terminal board.
//!
//! # Architecture
//!
//! - **Game**: [`GameState`] holds the board and whose turn it is; the
//!   [`Outcome`] is recomputed from the board by [`compute_outcome`].
//! - **TUI**: [`tui`] renders the board and status line with ratatui and
//!   forwards clicks and keys into the game.
//! - **Config**: [`Config`] is read from an optional TOML file.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{GameState, Outcome, Mark};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, LogConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardParseError, GameState, Mark, MoveError, Outcome, Position,
    PositionParseError, SQUARES, Snapshot, Square, Status, compute_outcome, invariants, rules,
};
