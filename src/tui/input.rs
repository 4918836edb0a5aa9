//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::ui::ScreenLayout;
use crate::games::tictactoe::{Action, Position};

/// What a terminal event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward an action to the game.
    Action(Action),
    /// Move the keyboard cursor with an arrow key.
    Cursor(KeyCode),
    /// Click the cell under the cursor.
    Select,
    /// Repaint without changing state (e.g. after a resize).
    Redraw,
    /// Leave the application.
    Quit,
}

/// Moves the cursor one step with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps a key press to an input.
pub fn from_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Action(Action::Restart)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(|pos| Input::Action(Action::CellClicked(pos))),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Select),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Input::Cursor(code))
        }
        _ => None,
    }
}

/// Maps a left click on a cell or the restart button to an action.
pub fn from_mouse(mouse: MouseEvent, screen: &ScreenLayout) -> Option<Input> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if screen.is_restart(mouse.column, mouse.row) {
        return Some(Input::Action(Action::Restart));
    }

    screen
        .cell_at(mouse.column, mouse.row)
        .map(|pos| Input::Action(Action::CellClicked(pos)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Center, KeyCode::Up), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(Center, KeyCode::Left), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Right), MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(BottomRight, KeyCode::Right), BottomRight);
        assert_eq!(move_cursor(MiddleRight, KeyCode::Right), MiddleRight);
        assert_eq!(move_cursor(Center, KeyCode::Tab), Center);
    }
}
