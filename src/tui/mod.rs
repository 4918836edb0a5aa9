//! Terminal UI for tic-tac-toe.
//!
//! The loop is synchronous: it blocks on one terminal event, turns it into
//! at most one state transition, and repaints only when [`App`] asks for it.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::Config;

pub use app::{App, GameEvent};
pub use input::{Input, from_key, from_mouse, move_cursor};
pub use ui::{HELP, ScreenLayout, draw, layout};

/// Runs the interactive game until the user quits.
pub fn run(config: &Config) -> Result<()> {
    init_file_tracing(config)?;

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config.title().as_str()));
    drop(guard);
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Raw mode, alternate screen and mouse capture. Restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, any early return drops the guard and restores the terminal.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Logs to the configured file so traces don't interfere with the screen.
fn init_file_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log().file())
        .with_context(|| format!("Failed to create log file {}", config.log().file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|f| draw(f, &app))?;
            app.mark_drawn();
        }

        let input = match event::read()? {
            Event::Key(key) => from_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                from_mouse(mouse, &layout(Rect::new(0, 0, size.width, size.height)))
            }
            Event::Resize(..) => Some(Input::Redraw),
            _ => None,
        };

        if let Some(input) = input {
            app.handle_input(input);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
