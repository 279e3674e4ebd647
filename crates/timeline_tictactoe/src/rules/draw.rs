//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winner;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Won or drawn.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_draw(board)
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    // X O X / O X X / O X O
    fn drawn() -> Board {
        use Mark::{O, X};
        Board::from_cells([X, O, X, O, X, X, O, X, O].map(Cell::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = drawn();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O].map(Cell::Occupied));
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert!(is_terminal(&board));
    }
}
