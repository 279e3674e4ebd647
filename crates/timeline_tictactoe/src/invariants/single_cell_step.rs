//! Single-cell step invariant: each ply fills exactly one empty cell.

use super::super::{rules, GameHistory};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The differing cell must be empty in the earlier snapshot, so a cell
/// never changes once marked.
pub struct SingleCellStepInvariant;

impl Invariant<GameHistory> for SingleCellStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| rules::changed_cell(pair[0].board(), pair[1].board()).is_ok())
    }

    fn description() -> &'static str {
        "Each ply fills exactly one previously empty cell"
    }
}
