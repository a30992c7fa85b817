//! The move list shown next to the board.

use super::History;
use super::locate::locate_move;
use super::position::Location;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryEntry {
    /// The history step this entry jumps to.
    pub step: usize,
    /// Where the ply landed; `None` for the game start.
    pub location: Option<Location>,
    /// Human-readable label.
    pub label: String,
}

impl HistoryEntry {
    fn new(step: usize, location: Option<Location>) -> Self {
        let label = match location {
            None => "Go to game start".to_string(),
            Some(Location { row, col }) => {
                format!("Go to move #{} ({}, {})", step, row + 1, col + 1)
            }
        };
        Self {
            step,
            location,
            label,
        }
    }
}

/// Builds the move list for `history` in `order`.
///
/// Entries are labelled against their own step before they are ordered, so
/// every entry still points at the snapshot it describes.
#[instrument(skip(history), fields(history_len = history.len()))]
pub fn history_entries(history: &History, order: HistoryOrder) -> Vec<HistoryEntry> {
    let snapshots = history.snapshots();
    let mut entries: Vec<HistoryEntry> = std::iter::once(HistoryEntry::new(0, None))
        .chain(
            snapshots
                .windows(2)
                .enumerate()
                .map(|(i, pair)| HistoryEntry::new(i + 1, Some(locate_move(&pair[0], &pair[1])))),
        )
        .collect();

    if order == HistoryOrder::Descending {
        entries.reverse();
    }
    entries
}
