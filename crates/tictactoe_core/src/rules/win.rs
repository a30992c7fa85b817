//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who holds it and which cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinResult {
    /// The player holding all three cells.
    pub winner: Player,
    /// Cell indices of the line, in line order.
    pub line: [usize; 3],
}

impl WinResult {
    /// Whether `index` is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Evaluates the board for a completed line.
///
/// Lines are checked in [`LINES`] order and the first complete one is
/// returned. Two complete lines can only come from a hand-built board; the
/// fixed order keeps the answer deterministic there too.
#[instrument]
pub fn evaluate_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.at(a);
        match sq {
            Square::Occupied(winner) if sq == board.at(b) && sq == board.at(c) => Some(WinResult {
                winner,
                line: [a.to_index(), b.to_index(), c.to_index()],
            }),
            _ => None,
        }
    })
}
