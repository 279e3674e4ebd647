//! Move application and snapshot diffing.

use super::super::{Board, Cell, GameError, InvalidReason, Mark, Position};
use super::win::winner;
use tracing::{instrument, warn};

/// Places `mark` at `index`, returning a new board.
///
/// # Errors
///
/// - `GameAlreadyOver` if `board` already has a winner.
/// - `InvalidMove` if `index` is outside 0-8 or the cell is occupied.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, GameError> {
    if winner(board).is_some() {
        return Err(GameError::GameAlreadyOver);
    }

    let pos = Position::from_index(index).ok_or(GameError::InvalidMove {
        index,
        reason: InvalidReason::OutOfBounds,
    })?;

    if !board.is_empty(pos) {
        return Err(GameError::InvalidMove {
            index,
            reason: InvalidReason::Occupied,
        });
    }

    Ok(board.with(pos, Cell::Occupied(mark)))
}

/// Finds the single cell filled between two consecutive snapshots.
///
/// # Errors
///
/// `HistoryInvariantViolation` unless exactly one cell differs and that
/// cell was empty in `prev`.
#[instrument(skip(prev, next))]
pub fn changed_cell(prev: &Board, next: &Board) -> Result<Position, GameError> {
    let mut changed = Position::ALL
        .iter()
        .copied()
        .filter(|pos| prev.get(*pos) != next.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) if prev.is_empty(pos) => Ok(pos),
        (Some(pos), None) => {
            warn!(?pos, "Snapshot overwrote an occupied cell");
            Err(GameError::HistoryInvariantViolation(format!(
                "cell {} changed from an occupied state",
                pos.to_index()
            )))
        }
        (None, _) => {
            warn!("Consecutive snapshots are identical");
            Err(GameError::HistoryInvariantViolation(
                "no cell changed between snapshots".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            warn!("Consecutive snapshots differ in several cells");
            Err(GameError::HistoryInvariantViolation(
                "more than one cell changed between snapshots".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::new();
        let next = apply_move(&board, 4, Mark::X).expect("empty cell");
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        assert_eq!(
            apply_move(&Board::new(), 9, Mark::X),
            Err(GameError::InvalidMove {
                index: 9,
                reason: InvalidReason::OutOfBounds
            })
        );
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = apply_move(&Board::new(), 0, Mark::X).expect("empty cell");
        assert_eq!(
            apply_move(&board, 0, Mark::O),
            Err(GameError::InvalidMove {
                index: 0,
                reason: InvalidReason::Occupied
            })
        );
    }

    #[test]
    fn test_apply_move_rejects_won_board() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board = apply_move(&board, index, Mark::O).expect("empty cell");
        }
        assert_eq!(apply_move(&board, 5, Mark::X), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_changed_cell_finds_single_difference() {
        let prev = apply_move(&Board::new(), 0, Mark::X).expect("empty cell");
        let next = apply_move(&prev, 5, Mark::O).expect("empty cell");
        assert_eq!(changed_cell(&prev, &next), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_changed_cell_rejects_identical_boards() {
        let board = Board::new();
        assert!(matches!(
            changed_cell(&board, &board),
            Err(GameError::HistoryInvariantViolation(_))
        ));
    }

    #[test]
    fn test_changed_cell_rejects_two_differences() {
        let next = Board::new()
            .with(Position::TopLeft, Cell::Occupied(Mark::X))
            .with(Position::Center, Cell::Occupied(Mark::O));
        assert!(matches!(
            changed_cell(&Board::new(), &next),
            Err(GameError::HistoryInvariantViolation(_))
        ));
    }

    #[test]
    fn test_changed_cell_rejects_overwrite() {
        let prev = Board::new().with(Position::TopLeft, Cell::Occupied(Mark::X));
        let next = Board::new().with(Position::TopLeft, Cell::Occupied(Mark::O));
        assert!(matches!(
            changed_cell(&prev, &next),
            Err(GameError::HistoryInvariantViolation(_))
        ));
    }
}
