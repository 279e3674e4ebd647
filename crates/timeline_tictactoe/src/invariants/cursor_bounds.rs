//! Cursor bounds invariant.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: the cursor names an existing ply and ply 0 is the empty board.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.len()
            && history
                .snapshots()
                .first()
                .is_some_and(|first| *first.board() == Board::new())
    }

    fn description() -> &'static str {
        "Cursor is within history and ply 0 is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_jumps() {
        let mut history = GameHistory::new();
        for index in [4, 0, 8] {
            history.play_move(index).expect("legal move");
        }
        for ply in 0..history.len() {
            history.jump_to(ply).expect("ply exists");
            assert!(CursorInBoundsInvariant::holds(&history));
        }
    }

    #[test]
    fn test_empty_history_violates() {
        let mut history = GameHistory::new();
        history.snapshots.clear();
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}
