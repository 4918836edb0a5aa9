//! Application state and logic.

use tracing::{debug, info};

use super::input::{Input, move_cursor};
use crate::games::tictactoe::{Action, GameState, Mark, Position};

/// Accepted state transition, emitted so the view knows to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MovePlayed {
        /// Mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// The board was cleared.
    Restarted,
}

/// Main application state.
///
/// Owns the only [`GameState`]; every input goes through [`App::handle_input`].
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    title: String,
    cursor: Position,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            game: GameState::new(),
            title: title.into(),
            cursor: Position::Center,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True when the screen is out of date.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Records that the current state has been drawn.
    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one mapped terminal input.
    pub fn handle_input(&mut self, input: Input) -> Option<GameEvent> {
        match input {
            Input::Action(action) => self.dispatch(action),
            Input::Cursor(key) => {
                self.set_cursor(move_cursor(self.cursor, key));
                None
            }
            Input::Select => self.dispatch(Action::CellClicked(self.cursor)),
            Input::Redraw => {
                self.needs_redraw = true;
                None
            }
            Input::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
        }
    }

    /// Applies an action to the game.
    ///
    /// Returns the event when the transition was accepted; rejected clicks
    /// return `None` and leave the screen as it is.
    pub fn dispatch(&mut self, action: Action) -> Option<GameEvent> {
        debug!(%action, "Dispatching action");

        let event = match action {
            Action::CellClicked(position) => match self.game.play(position) {
                Ok(mark) => {
                    self.cursor = position;
                    Some(GameEvent::MovePlayed { mark, position })
                }
                Err(e) => {
                    debug!(reason = %e, "Click ignored");
                    None
                }
            },
            Action::Restart => {
                self.game.restart();
                Some(GameEvent::Restarted)
            }
        };

        if let Some(event) = event {
            self.needs_redraw = true;
            let outcome = self.game.outcome();
            if outcome.is_terminal() {
                info!(%outcome, "Game over");
            }
            debug!(?event, status = %self.game.status(), "State changed");
        }

        event
    }

    fn set_cursor(&mut self, cursor: Position) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.needs_redraw = true;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new("Tic Tac Toe")
    }
}
