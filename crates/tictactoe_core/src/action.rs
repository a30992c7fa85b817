//! The reasons a move can be refused.

use super::{Player, Position};

/// Why a move was refused.
///
/// These are ordinary outcomes of user input, not faults: the game state is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
