//! First-class invariants for move histories.
//!
//! Invariants are logical properties that must hold for every history built
//! through [`apply_move`](crate::apply_move). They are checked in debug
//! builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of three invariants, the shape of [`HistoryInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod single_cell_delta;
pub mod starts_empty;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Player, Position, apply_move};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut history = History::new();
        let mut step = 0;
        for cell in [0, 4, 2] {
            (history, step) = apply_move(&history, step, cell).unwrap();
        }
        assert_eq!(step, 3);
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Starts non-empty, then O moves first and places two marks at once.
        let start = Board::new().with_mark(Position::Center, Player::X);
        let next = start
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::TopRight, Player::O);
        let history = History::from_snapshots_unchecked(vec![start, next]);

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations[0],
            InvariantViolation::new(StartsEmptyInvariant::description())
        );
    }
}
