//! Recovering where a ply landed from two neighbouring snapshots.

use super::invariants::{Invariant, InvariantViolation, SingleCellDeltaInvariant};
use super::{Board, Location};
use tracing::{error, instrument};

/// Finds the first cell, in row-major order, where `cur` differs from `prev`.
///
/// # Errors
///
/// Returns an [`InvariantViolation`] if the boards are identical.
#[instrument]
pub fn try_locate_move(prev: &Board, cur: &Board) -> Result<Location, InvariantViolation> {
    prev.squares()
        .iter()
        .zip(cur.squares())
        .position(|(before, after)| before != after)
        .map(Location::from_index)
        .ok_or_else(|| InvariantViolation::new(SingleCellDeltaInvariant::description()))
}

/// Row and column of the ply that turned `prev` into `cur`.
///
/// `prev` and `cur` must be neighbouring history snapshots.
///
/// # Panics
///
/// Panics if the boards are identical: a history built by
/// [`apply_move`](crate::apply_move) never holds two equal neighbours.
pub fn locate_move(prev: &Board, cur: &Board) -> Location {
    match try_locate_move(prev, cur) {
        Ok(location) => location,
        Err(violation) => {
            error!(%violation, "No ply between neighbouring snapshots");
            panic!("{}", violation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_locates_single_change() {
        let prev = Board::new().with_mark(Position::Center, Player::X);
        let cur = prev.with_mark(Position::BottomLeft, Player::O);
        assert_eq!(locate_move(&prev, &cur), Location::new(2, 0));
    }

    #[test]
    fn test_first_difference_wins() {
        let cur = Board::new()
            .with_mark(Position::MiddleRight, Player::X)
            .with_mark(Position::TopCenter, Player::O);
        assert_eq!(try_locate_move(&Board::new(), &cur), Ok(Location::new(0, 1)));
    }

    #[test]
    fn test_identical_boards_are_a_violation() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(try_locate_move(&board, &board).is_err());
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn test_locate_identical_boards_panics() {
        locate_move(&Board::new(), &Board::new());
    }
}
