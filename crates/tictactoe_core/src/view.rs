//! Read-only snapshot handed to front ends.

use super::listing::{HistoryEntry, HistoryOrder};
use super::status::GameStatus;
use super::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameView {
    /// The nine cells of the current board, row-major; `None` when empty.
    pub cells: Vec<Option<Player>>,
    /// Structured status.
    pub status: GameStatus,
    /// Status as shown to players, e.g. `"Next player: O"`.
    pub status_text: String,
    /// The selected history step.
    pub step: usize,
    /// Order of `history`.
    pub order: HistoryOrder,
    /// Move list, already in `order`.
    pub history: Vec<HistoryEntry>,
    /// Cells of the winning line to highlight.
    pub winning_line: Option<[usize; 3]>,
}

impl GameView {
    /// Whether `index` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&index))
    }
}
