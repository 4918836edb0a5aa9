//! Tests for the terminal UI: input mapping, dispatch and rendering.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_board::{
    Action, GameState, Mark, Position,
    tui::{App, GameEvent, Input, draw, from_key, from_mouse, layout},
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_digit_keys_click_cells() {
    assert_eq!(
        from_key(key(KeyCode::Char('1'))),
        Some(Input::Action(Action::CellClicked(Position::TopLeft)))
    );
    assert_eq!(
        from_key(key(KeyCode::Char('9'))),
        Some(Input::Action(Action::CellClicked(Position::BottomRight)))
    );
    assert_eq!(from_key(key(KeyCode::Char('0'))), None);
}

#[test]
fn test_control_keys() {
    assert_eq!(from_key(key(KeyCode::Char('r'))), Some(Input::Action(Action::Restart)));
    assert_eq!(from_key(key(KeyCode::Char('q'))), Some(Input::Quit));
    assert_eq!(from_key(key(KeyCode::Esc)), Some(Input::Quit));
    assert_eq!(from_key(key(KeyCode::Enter)), Some(Input::Select));
    assert_eq!(from_key(key(KeyCode::Left)), Some(Input::Cursor(KeyCode::Left)));
}

#[test]
fn test_key_release_ignored() {
    let mut release = key(KeyCode::Char('5'));
    release.kind = KeyEventKind::Release;
    assert_eq!(from_key(release), None);
}

#[test]
fn test_mouse_clicks_map_to_actions() {
    let screen = layout(Rect::new(0, 0, 60, 24));
    let corner = screen.cells[Position::BottomRight.to_index()];

    assert_eq!(
        from_mouse(left_click(corner.x + 3, corner.y + 1), &screen),
        Some(Input::Action(Action::CellClicked(Position::BottomRight)))
    );
    assert_eq!(
        from_mouse(left_click(screen.restart.x + 1, screen.restart.y + 1), &screen),
        Some(Input::Action(Action::Restart))
    );
    assert_eq!(from_mouse(left_click(0, 0), &screen), None);

    let mut right = left_click(corner.x + 3, corner.y + 1);
    right.kind = MouseEventKind::Down(MouseButton::Right);
    assert_eq!(from_mouse(right, &screen), None);
}

#[test]
fn test_accepted_click_emits_event_and_redraw() {
    let mut app = App::default();
    app.mark_drawn();

    let event = app.dispatch(Action::CellClicked(Position::TopLeft));
    assert_eq!(
        event,
        Some(GameEvent::MovePlayed {
            mark: Mark::X,
            position: Position::TopLeft
        })
    );
    assert!(app.needs_redraw());
}

#[test]
fn test_rejected_click_emits_nothing() {
    let mut app = App::default();
    app.dispatch(Action::CellClicked(Position::TopLeft));
    app.mark_drawn();
    let before = app.game().clone();

    assert_eq!(app.dispatch(Action::CellClicked(Position::TopLeft)), None);
    assert!(!app.needs_redraw());
    assert_eq!(app.game(), &before);
}

#[test]
fn test_restart_always_emits() {
    let mut app = App::default();
    app.mark_drawn();
    assert_eq!(app.dispatch(Action::Restart), Some(GameEvent::Restarted));
    assert!(app.needs_redraw());

    for index in [0, 3, 1, 4, 2] {
        let pos = Position::from_index(index).unwrap();
        app.dispatch(Action::CellClicked(pos));
    }
    assert_eq!(app.dispatch(Action::Restart), Some(GameEvent::Restarted));
    assert_eq!(app.game(), &GameState::new());
}

#[test]
fn test_keyboard_play_through_cursor() {
    let mut app = App::default();
    assert_eq!(app.cursor(), Position::Center);

    app.handle_input(Input::Cursor(KeyCode::Up));
    assert_eq!(app.cursor(), Position::TopCenter);

    let event = app.handle_input(Input::Select);
    assert_eq!(
        event,
        Some(GameEvent::MovePlayed {
            mark: Mark::X,
            position: Position::TopCenter
        })
    );
    assert_eq!(app.game().next_mark(), Mark::O);
}

#[test]
fn test_quit() {
    let mut app = App::default();
    assert!(!app.should_quit());
    app.handle_input(Input::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_status_and_marks() {
    let mut app = App::new("Board Test");
    let screen = render(&app);
    assert!(screen.contains("Board Test"));
    assert!(screen.contains("Next Player: X"));
    assert!(screen.contains("Restart Game"));

    for index in [0, 3, 1, 4, 2] {
        app.dispatch(Action::CellClicked(Position::from_index(index).unwrap()));
    }
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains('X'));
    assert!(screen.contains('O'));
}
