//! Stateless UI rendering for tic-tac-toe.
//!
//! [`layout`] is a pure function of the terminal area; the renderer and the
//! mouse hit-test both use it, so a click lands on the cell that was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Mark, Position, Square, rules};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;
const BUTTON_WIDTH: u16 = 18;

/// Help line shown at the bottom of the screen.
pub const HELP: &str = "1-9/Enter: Play | Arrows: Move | R: Restart | Q: Quit";

/// Screen areas for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Restart button.
    pub restart: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Returns the cell under a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| contains(*cell, column, row))
            .and_then(Position::from_index)
    }

    /// Checks if a terminal coordinate is on the restart button.
    pub fn is_restart(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(column, row))
}

/// Splits the terminal area into title, status, board, restart button and help.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(3),             // Status
            Constraint::Min(BOARD_HEIGHT),     // Board
            Constraint::Length(3),             // Restart button
            Constraint::Length(1),             // Help
        ])
        .split(area);

    let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        cells[pos.to_index()] = Rect::new(
            board.x + pos.col() as u16 * CELL_WIDTH,
            board.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board);
    }

    ScreenLayout {
        title: chunks[0],
        status: chunks[1],
        cells,
        restart: center_rect(chunks[3], BUTTON_WIDTH, 3),
        help: chunks[4],
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout(frame.area());
    let game = app.game();

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, screen.title);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, screen.status);

    let winning = rules::winning_line(game.board()).map(|(line, _)| line);
    for pos in Position::ALL {
        let highlighted = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(
            frame,
            screen.cells[pos.to_index()],
            game.board().get(pos),
            pos == app.cursor(),
            highlighted,
        );
    }

    let restart = Paragraph::new("Restart Game")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, screen.restart);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, cursor: bool, highlighted: bool) {
    let (symbol, mut style) = match square {
        Square::Empty => (" ", Style::default()),
        Square::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };
    if highlighted {
        style = style.fg(Color::Green);
    }

    let border = if cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_tile_the_board() {
        let screen = layout(Rect::new(0, 0, 80, 24));
        let first = screen.cells[0];
        for pos in Position::ALL {
            let cell = screen.cells[pos.to_index()];
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
            assert_eq!(cell.x, first.x + pos.col() as u16 * CELL_WIDTH);
            assert_eq!(cell.y, first.y + pos.row() as u16 * CELL_HEIGHT);
        }
    }

    #[test]
    fn test_hit_testing() {
        let screen = layout(Rect::new(0, 0, 80, 24));
        let center = screen.cells[4];
        assert_eq!(
            screen.cell_at(center.x + 1, center.y + 1),
            Some(Position::Center)
        );
        assert_eq!(screen.cell_at(0, 0), None);
        assert!(screen.is_restart(screen.restart.x + 2, screen.restart.y + 1));
        assert!(!screen.is_restart(center.x, center.y));
    }
}
