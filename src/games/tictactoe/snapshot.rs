//! Serializable view of a game for rendering or export.

use super::{GameState, Mark, Outcome, SQUARES};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs: the nine cells and the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order, `None` when empty.
    pub cells: [Option<Mark>; SQUARES],
    /// Mark due to move.
    pub next: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            cells: game.board().squares().map(|s| s.mark()),
            next: game.next_mark(),
            outcome: game.outcome(),
            status: game.status().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json() {
        let game = GameState::replay(&[0, 4]);
        let json = serde_json::to_value(Snapshot::from(&game)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cells": ["X", null, null, null, "O", null, null, null, null],
                "next": "X",
                "outcome": "InProgress",
                "status": "Next Player: X",
            })
        );
    }

    #[test]
    fn test_snapshot_winner_json() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]);
        let json = serde_json::to_value(Snapshot::from(&game)).unwrap();
        assert_eq!(json["outcome"], serde_json::json!({ "Winner": "X" }));
        assert_eq!(json["status"], "Winner: X");
    }
}
