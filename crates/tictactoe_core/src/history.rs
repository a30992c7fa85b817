//! Move history, the move applier and the time-travel navigator.
//!
//! A [`History`] is a list of board snapshots: index 0 is the empty board and
//! index `k` is the board after `k` plies. Histories are values. Applying a
//! move reads the old history and builds a new one, so anyone still holding
//! the old value (a list being rendered, a saved step) keeps seeing exactly
//! what it saw before.

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate_winner;
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, error, instrument};

/// History entry: the board as it stood after a ply.
pub type Move = Board;

/// Ordered board snapshots from game start to the latest ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<Move>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Wraps snapshots without checking any history invariant.
    #[cfg(test)]
    pub(crate) fn from_snapshots_unchecked(snapshots: Vec<Move>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Board at `step`, if the step exists.
    pub fn board(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Board {
        // `new` seeds one snapshot and nothing removes the first.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Move] {
        &self.snapshots
    }

}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// The player to move from `step`: X on even steps, O on odd ones.
pub const fn player_for_step(step: usize) -> Player {
    if step % 2 == 0 { Player::X } else { Player::O }
}

/// Applies a move at `cell` on top of the board at `current_step`.
///
/// On success returns the new history and the new current step
/// (`current_step + 1`). Snapshots after `current_step` are dropped before
/// the new one is appended, so a move played from the past discards the
/// abandoned future. The input history is never modified.
///
/// # Errors
///
/// * [`MoveError::OutOfBounds`] if `cell` is not in `0..9`;
/// * [`MoveError::GameOver`] if the board at `current_step` has a winner;
/// * [`MoveError::SquareOccupied`] if the target square is taken.
///
/// # Panics
///
/// Panics if `current_step` is not a step of `history`.
#[instrument(skip(history), fields(history_len = history.len()))]
pub fn apply_move(
    history: &History,
    current_step: usize,
    cell: usize,
) -> Result<(History, usize), MoveError> {
    let board = *history.board(current_step).unwrap_or_else(|| {
        panic!(
            "step {} is outside a history of {} snapshots",
            current_step,
            history.len()
        )
    });

    let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;

    if let Some(result) = evaluate_winner(&board) {
        return Err(MoveError::GameOver(result.winner));
    }

    if !board.is_empty(position) {
        return Err(MoveError::SquareOccupied(position));
    }

    let player = player_for_step(current_step);
    let mut snapshots = Vec::with_capacity(current_step + 2);
    snapshots.extend_from_slice(&history.snapshots[..=current_step]);
    snapshots.push(board.with_mark(position, player));

    let next = History { snapshots };
    debug_assert_history(&next);

    let new_step = current_step + 1;
    debug!(%player, %position, new_step, discarded = history.len() - current_step - 1, "Move applied");
    Ok((next, new_step))
}

/// Selects `step` as the current step.
///
/// Only the caller's step changes: the history is not truncated. Whose turn
/// it is follows from the returned step via [`player_for_step`].
///
/// # Panics
///
/// Panics if `step` is not a step of `history`. Front ends only offer steps
/// they read from the history, so this is a caller bug.
#[instrument(skip(history), fields(history_len = history.len()))]
pub fn jump_to(history: &History, step: usize) -> usize {
    assert!(
        step < history.len(),
        "cannot jump to step {} in a history of {} snapshots",
        step,
        history.len()
    );
    step
}

fn debug_assert_history(history: &History) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(history)
    {
        for violation in &violations {
            error!(%violation, "History invariant broken");
        }
        panic!("history invariants broken: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(cells: &[usize]) -> (History, usize) {
        cells.iter().fold((History::new(), 0), |(history, step), &cell| {
            apply_move(&history, step, cell).unwrap()
        })
    }

    #[test]
    fn test_new_history_has_empty_start() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest(), &Board::new());
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let (history, step) = play(&[4, 0]);
        assert_eq!(step, 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().at(Position::Center), Square::Occupied(Player::X));
        assert_eq!(history.latest().at(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(player_for_step(step), Player::X);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let (history, step) = play(&[4]);
        let before = history.clone();
        let (next, _) = apply_move(&history, step, 0).unwrap();

        assert_eq!(history, before);
        assert_eq!(next.len(), history.len() + 1);
    }

    #[test]
    fn test_rejections_keep_length() {
        let (history, step) = play(&[4]);

        assert_eq!(
            apply_move(&history, step, 4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(apply_move(&history, step, 9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let (history, step) = play(&[0, 1, 3, 2, 6]);
        assert_eq!(apply_move(&history, step, 8), Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_move_from_past_truncates_future() {
        let (history, _) = play(&[0, 1, 2, 3]);
        let step = jump_to(&history, 1);
        let (branched, new_step) = apply_move(&history, step, 8).unwrap();

        assert_eq!(new_step, 2);
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.snapshots()[..2], history.snapshots()[..2]);
        assert_eq!(branched.latest().at(Position::BottomRight), Square::Occupied(Player::O));
        assert!(branched.latest().is_empty(Position::TopRight));
    }

    #[test]
    fn test_jump_does_not_truncate() {
        let (history, _) = play(&[0, 1, 2]);
        assert_eq!(jump_to(&history, 0), 0);
        assert_eq!(jump_to(&history, 3), 3);
        assert_eq!(history.len(), 4);
    }

    #[test]
    #[should_panic(expected = "cannot jump to step 4")]
    fn test_jump_out_of_range_panics() {
        let (history, _) = play(&[0, 1, 2]);
        jump_to(&history, 4);
    }

    #[test]
    fn test_player_for_step_parity() {
        assert_eq!(player_for_step(0), Player::X);
        assert_eq!(player_for_step(1), Player::O);
        assert_eq!(player_for_step(8), Player::X);
    }
}
