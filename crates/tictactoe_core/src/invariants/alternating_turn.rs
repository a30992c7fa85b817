//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{History, Player};

/// Invariant: Players alternate turns.
///
/// After `k` plies X holds `ceil(k / 2)` marks and O holds `floor(k / 2)`,
/// which is exactly what step parity hands out.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().iter().enumerate().all(|(step, board)| {
            let x_expected = step.div_ceil(2);
            let o_expected = step / 2;
            board.count(Player::X) == x_expected && board.count(Player::O) == o_expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, apply_move, player_for_step};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&History::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut history = History::new();
        let mut step = 0;
        for cell in [0, 4, 2, 6, 8] {
            (history, step) = apply_move(&history, step, cell).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&history));
        assert_eq!(player_for_step(step), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Player::X);
        let second = first.with_mark(Position::Center, Player::X);
        let history = History::from_snapshots_unchecked(vec![Board::new(), first, second]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let history = History::from_snapshots_unchecked(vec![Board::new(), first]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
