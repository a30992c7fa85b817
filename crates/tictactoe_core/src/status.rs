//! Status line for a board and the player to move.

use super::rules::{evaluate_winner, is_draw};
use super::{Board, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line should say.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
#[serde(tag = "state", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
    /// The game goes on with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// Derives the status of `board` with `current_player` to move.
///
/// A win outranks a draw, and a draw outranks the next-player prompt.
#[instrument]
pub fn status(board: &Board, current_player: Player) -> GameStatus {
    if let Some(result) = evaluate_winner(board) {
        GameStatus::Winner(result.winner)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::NextPlayer(current_player)
    }
}
