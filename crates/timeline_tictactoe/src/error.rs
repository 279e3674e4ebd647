//! Errors raised by the board engine and the history manager.

/// Why a cell index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// Index outside 0-8.
    #[display("out of bounds")]
    OutOfBounds,
    /// Cell already holds a mark.
    #[display("occupied")]
    Occupied,
}

/// Error returned by game operations.
///
/// Every variant except `HistoryInvariantViolation` is a caller error that
/// leaves the game exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell is occupied or out of range.
    #[display("Invalid move at cell {}: {}", index, reason)]
    InvalidMove {
        /// Requested cell index.
        index: usize,
        /// Why the cell was rejected.
        reason: InvalidReason,
    },

    /// The board at the cursor already has a winner.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// All nine cells are occupied.
    #[display("Board is full")]
    BoardFull,

    /// Requested ply is not in history.
    #[display("Ply {} out of range (history has {} plies)", ply, len)]
    OutOfRange {
        /// Requested ply.
        ply: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// History was built inconsistently; a defect, never a user condition.
    #[display("History invariant violation: {}", _0)]
    HistoryInvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// True for errors a caller can trigger through normal input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::HistoryInvariantViolation(_))
    }
}
