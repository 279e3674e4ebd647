//! Branchable move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot of a session, the cursor
//! naming the active snapshot, and the move-list display order. It is the
//! only write path: [`GameHistory::play_move`] appends (dropping any future
//! branch) and [`GameHistory::jump_to`] moves the cursor.

use super::invariants::assert_invariants;
use super::label::{MoveEntry, MoveLabel};
use super::rules::{self, Line};
use super::{Board, GameError, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Oldest ply first.
    #[default]
    Ascending,
    /// Newest ply first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// True when oldest plies come first.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// An immutable board at a given ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    ply: usize,
    board: Board,
}

impl Snapshot {
    pub(crate) fn new(ply: usize, board: Board) -> Self {
        Self { ply, board }
    }

    /// Ply number (0 is the empty board).
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The board after this ply.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// A game session's history manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    cursor: usize,
    sort_order: SortOrder,
}

impl GameHistory {
    /// Creates a session holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a session with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            snapshots: vec![Snapshot::new(0, Board::new())],
            cursor: 0,
            sort_order,
        }
    }

    /// Plays the cursor's mark at `index`, returning the new ply.
    ///
    /// Any plies after the cursor are discarded before the new snapshot is
    /// appended; the cursor then moves to the new tail.
    ///
    /// # Errors
    ///
    /// - `BoardFull` if the cursor board has no empty cell.
    /// - `GameAlreadyOver` if the cursor board has a winner.
    /// - `InvalidMove` if `index` is outside 0-8 or already occupied.
    ///
    /// On error the history is left untouched.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play_move(&mut self, index: usize) -> Result<usize, GameError> {
        let current = self.board();
        if rules::is_full(current) {
            warn!("Move rejected: board is full");
            return Err(GameError::BoardFull);
        }

        let mark = self.current_mark();
        let next = rules::apply_move(current, index, mark).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let discarded = self.snapshots.len() - self.cursor - 1;
        if discarded > 0 {
            debug!(discarded, "Truncating future branch");
        }
        self.snapshots.truncate(self.cursor + 1);

        let ply = self.snapshots.len();
        self.snapshots.push(Snapshot::new(ply, next));
        self.cursor = ply;

        assert_invariants(self);

        info!(ply, ?mark, index, "Move played");
        Ok(ply)
    }

    /// Moves the cursor to `ply` without touching history.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `ply` is not in history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, ply: usize) -> Result<(), GameError> {
        if ply >= self.snapshots.len() {
            warn!("Jump rejected: ply out of range");
            return Err(GameError::OutOfRange {
                ply,
                len: self.snapshots.len(),
            });
        }
        self.cursor = ply;
        debug!(next = ?self.current_mark(), "Cursor moved");
        Ok(())
    }

    /// Flips the move-list order and returns the new value.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
        self.sort_order
    }

    /// Status of the board at the cursor.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        Self::status_at(self.board(), self.cursor)
    }

    /// Status of the last ply in history, whatever the cursor.
    #[instrument(skip(self))]
    pub fn tail_status(&self) -> GameStatus {
        let tail = self.snapshots.len() - 1;
        Self::status_at(&self.snapshots[tail].board, tail)
    }

    fn status_at(board: &Board, ply: usize) -> GameStatus {
        if let Some(mark) = rules::winner(board) {
            GameStatus::Won(mark)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(Mark::for_ply(ply))
        }
    }

    /// Describes `ply` by diffing it against its predecessor.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `ply` is not in history. A malformed history yields
    /// `HistoryInvariantViolation` and panics in debug builds.
    #[instrument(skip(self))]
    pub fn describe_move(&self, ply: usize) -> Result<MoveLabel, GameError> {
        let len = self.snapshots.len();
        if ply >= len {
            return Err(GameError::OutOfRange { ply, len });
        }
        if ply == 0 {
            return Ok(MoveLabel::Start);
        }

        let prev = &self.snapshots[ply - 1].board;
        let next = &self.snapshots[ply].board;
        let position = rules::changed_cell(prev, next).map_err(|e| {
            error!(error = %e, ply, "Cannot label move");
            debug_assert!(false, "{}", e);
            e
        })?;

        Ok(MoveLabel::Move { ply, position })
    }

    /// Every ply's label in display order, flagging the cursor's entry.
    ///
    /// # Errors
    ///
    /// Propagates `describe_move` failures.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Result<Vec<MoveEntry>, GameError> {
        let mut entries = (0..self.snapshots.len())
            .map(|ply| {
                self.describe_move(ply).map(|label| MoveEntry {
                    label,
                    is_current: ply == self.cursor,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !self.sort_order.is_ascending() {
            entries.reverse();
        }
        Ok(entries)
    }

    /// The completed line on the cursor board, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        rules::find_winning_line(self.board())
    }

    /// Discards the session and starts again from the empty board.
    ///
    /// The move-list order is a viewer preference and survives the reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(plies = self.snapshots.len() - 1, "Session reset");
        *self = Self::with_sort_order(self.sort_order);
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.cursor].board
    }

    /// The mark to move at the cursor.
    pub fn current_mark(&self) -> Mark {
        Mark::for_ply(self.cursor)
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: ply 0 is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot at `ply`, if present.
    pub fn snapshot(&self, ply: usize) -> Option<&Snapshot> {
        self.snapshots.get(ply)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
