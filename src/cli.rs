//! Command-line interface for tictactoe_board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_board")]
#[command(about = "Tic-tac-toe with a terminal board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Apply moves to a new game and print the result
    Replay {
        /// Comma-separated cells: indices 0-8 or labels like "center"
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tictactoe_board"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_splits_moves_on_commas() {
        let cli =
            Cli::try_parse_from(["tictactoe_board", "replay", "--moves", "0,center,0"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".to_string(), "center".to_string(), "0".to_string()],
                json: false,
            })
        );
    }

    #[test]
    fn test_replay_json_and_global_config() {
        let cli = Cli::try_parse_from([
            "tictactoe_board",
            "replay",
            "-m",
            "4",
            "--json",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Some(Command::Replay { json: true, .. })));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe_board", "replay"]).is_err());
    }
}
