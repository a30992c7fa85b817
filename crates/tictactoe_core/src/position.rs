//! Named board positions and their grid coordinates.

use super::types::{Board, COLS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Zero-based row and column of a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct Location {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Location {
    /// Location of a row-major cell index.
    pub fn from_index(index: usize) -> Self {
        Self::new(index / COLS, index % COLS)
    }

    /// Row-major cell index of this location.
    pub fn to_index(self) -> usize {
        self.row * COLS + self.col
    }
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a position label, ignoring case and surrounding whitespace.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Position> {
        let s_lower = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / COLS
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % COLS
    }

    /// Row and column of this position.
    pub fn location(self) -> Location {
        Location::from_index(self.to_index())
    }

    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_coordinates() {
        assert_eq!(Position::TopLeft.location(), Location::new(0, 0));
        assert_eq!(Position::MiddleRight.location(), Location::new(1, 2));
        assert_eq!(Position::BottomCenter.location(), Location::new(2, 1));
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row() * COLS + pos.col(), index);
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label("Center"), Some(Position::Center));
        assert_eq!(
            Position::from_label(" bottom-right "),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::from_label("4"), None);
        assert_eq!(Position::from_label(""), None);
        assert_eq!(Position::from_label("nowhere"), None);
    }
}
