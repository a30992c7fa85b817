//! Starting-board invariant: every history begins with the empty board.

use super::Invariant;
use crate::{Board, History};

/// Invariant: the first snapshot is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
