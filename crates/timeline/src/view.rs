//! JSON view of a session for scripting.

use serde::Serialize;
use timeline_tictactoe::{GameError, GameHistory, GameStatus, Mark, MoveEntry, SortOrder};

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Cursor board, row-major; `None` for empty cells.
    pub board: [Option<Mark>; 9],
    /// Status at the cursor.
    pub status: GameStatus,
    /// Status at the last ply.
    pub tail_status: GameStatus,
    /// Active ply.
    pub cursor: usize,
    /// Number of snapshots including ply 0.
    pub plies: usize,
    /// Winning cells at the cursor, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Move-list order.
    pub sort_order: SortOrder,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl SessionView {
    /// Captures the current state of `game`.
    ///
    /// # Errors
    ///
    /// Propagates a history invariant violation from labelling.
    pub fn capture(game: &GameHistory) -> Result<Self, GameError> {
        Ok(Self {
            board: (*game.board().cells()).map(|c| c.mark()),
            status: game.status(),
            tail_status: game.tail_status(),
            cursor: game.cursor(),
            plies: game.len(),
            winning_line: game.winning_line().map(|l| l.indices()),
            sort_order: game.sort_order(),
            moves: game.move_list()?,
        })
    }
}
