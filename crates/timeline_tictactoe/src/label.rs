//! Move-list labels.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Description of one ply, as shown in a move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveLabel {
    /// Ply 0, the empty board.
    Start,
    /// A ply produced by a move.
    Move {
        /// Ply number (1-based).
        ply: usize,
        /// Cell filled by the move.
        position: Position,
    },
}

impl MoveLabel {
    /// Ply this label describes.
    pub fn ply(&self) -> usize {
        match self {
            MoveLabel::Start => 0,
            MoveLabel::Move { ply, .. } => *ply,
        }
    }

    /// Mark placed by the move; `None` for the start or a zero ply.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            MoveLabel::Start => None,
            MoveLabel::Move { ply, .. } => ply.checked_sub(1).map(Mark::for_ply),
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::Start => write!(f, "Go to game start"),
            MoveLabel::Move { ply, position } => write!(
                f,
                "Go to move #{} (col {}, row {})",
                ply,
                position.column(),
                position.row()
            ),
        }
    }
}

/// A move-list row: the label plus whether it is the cursor's ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// What the ply did.
    pub label: MoveLabel,
    /// True for the ply at the cursor.
    pub is_current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_label() {
        assert_eq!(MoveLabel::Start.to_string(), "Go to game start");
        assert_eq!(MoveLabel::Start.ply(), 0);
        assert_eq!(MoveLabel::Start.mark(), None);
    }

    #[test]
    fn test_move_label_encodes_column_then_row() {
        let label = MoveLabel::Move {
            ply: 2,
            position: Position::MiddleRight,
        };
        assert_eq!(label.to_string(), "Go to move #2 (col 3, row 2)");
        assert_eq!(label.mark(), Some(Mark::O));
    }

    #[test]
    fn test_zero_ply_move_has_no_mark() {
        let label = MoveLabel::Move {
            ply: 0,
            position: Position::Center,
        };
        assert_eq!(label.mark(), None);
    }
}
