//! Tic-tac-toe - terminal game and move replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_board::{Config, GameState, Snapshot, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(&config),
        Command::Replay { moves, json } => {
            init_stderr_tracing(&config);
            run_replay(&moves, json)
        }
    }
}

fn init_stderr_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Plays `moves` on a new game, skipping rejected ones like ignored clicks.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let game = GameState::replay_labels(moves)?;
    info!(outcome = %game.outcome(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&Snapshot::from(&game))?);
    } else {
        println!("{}\n{}", game.board(), game.status());
    }

    Ok(())
}
