//! Balanced marks invariant: X leads O by zero or one on every ply.

use super::super::{GameHistory, Mark};
use super::Invariant;

/// Invariant: marks alternate starting with X.
///
/// On every snapshot the number of X marks equals the number of O marks
/// or exceeds it by one, and the ply number equals the marks placed.
pub struct BalancedMarksInvariant;

impl Invariant<GameHistory> for BalancedMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().iter().enumerate().all(|(ply, snapshot)| {
            let board = snapshot.board();
            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            snapshot.ply() == ply && x + o == ply && (x == o || x == o + 1)
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... on every ply"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Position, Snapshot};

    #[test]
    fn test_played_history_holds() {
        let mut history = GameHistory::new();
        for index in [0, 1, 2, 3] {
            history.play_move(index).expect("legal move");
        }
        assert!(BalancedMarksInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let mut history = GameHistory::new();
        history.play_move(4).expect("legal move");
        history.snapshots[1] = Snapshot::new(
            1,
            Board::new().with(Position::Center, Cell::Occupied(Mark::O)),
        );
        assert!(!BalancedMarksInvariant::holds(&history));
    }

    #[test]
    fn test_misnumbered_ply_violates() {
        let mut history = GameHistory::new();
        history.play_move(4).expect("legal move");
        let board = history.board().clone();
        history.snapshots[1] = Snapshot::new(3, board);
        assert!(!BalancedMarksInvariant::holds(&history));
    }
}
