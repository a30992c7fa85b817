//! Single-cell delta invariant: each ply fills exactly one empty square.

use super::Invariant;
use crate::{History, Square};

/// Invariant: neighbouring snapshots differ in exactly one cell.
///
/// The differing cell is empty in the earlier snapshot and occupied in the
/// later one, so marks are never moved or erased.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let mut changed = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after);

            match (changed.next(), changed.next()) {
                (Some((before, after)), None) => {
                    *before == Square::Empty && *after != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each ply fills exactly one previously empty square"
    }
}
