//! Stateless text rendering of a session.

use timeline_tictactoe::{Cell, GameError, GameHistory, Position};

/// Renders the cursor board, bracketing the winning line.
///
/// Empty cells show their index so they can be typed back.
pub fn board(game: &GameHistory) -> String {
    let line = game.winning_line();
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| {
                    let symbol = match game.board().get(*pos) {
                        Cell::Empty => pos.to_index().to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    };
                    if line.is_some_and(|l| l.contains(*pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Status line, noting when the cursor is behind the tail.
pub fn status(game: &GameHistory) -> String {
    let tail = game.len() - 1;
    if game.cursor() == tail {
        game.status().to_string()
    } else {
        format!(
            "{} (viewing ply {} of {})",
            game.status(),
            game.cursor(),
            tail
        )
    }
}

/// Move list in display order; the cursor's entry is marked with `>`.
///
/// # Errors
///
/// Propagates a history invariant violation from labelling.
pub fn moves(game: &GameHistory) -> Result<String, GameError> {
    let mut out = format!("sort: {}", game.sort_order());
    for entry in game.move_list()? {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("\n{} {}", marker, entry.label));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_shows_indices_and_marks() {
        let mut game = GameHistory::new();
        game.play_move(4).expect("legal move");
        assert_eq!(
            board(&game),
            " 0 | 1 | 2 \n---+---+---\n 3 | X | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_board_brackets_winning_line() {
        let mut game = GameHistory::new();
        for index in [0, 1, 3, 4, 6] {
            game.play_move(index).expect("legal move");
        }
        let rendered = board(&game);
        assert!(rendered.starts_with("[X]| O | 2 "));
        assert!(rendered.ends_with("[X]| 7 | 8 "));
    }

    #[test]
    fn test_status_mentions_review() {
        let mut game = GameHistory::new();
        game.play_move(4).expect("legal move");
        game.play_move(0).expect("legal move");
        assert_eq!(status(&game), "Next player: X");
        game.jump_to(1).expect("ply exists");
        assert_eq!(status(&game), "Next player: O (viewing ply 1 of 2)");
    }

    #[test]
    fn test_moves_marks_cursor() {
        let mut game = GameHistory::new();
        game.play_move(4).expect("legal move");
        game.toggle_sort();
        assert_eq!(
            moves(&game).expect("consistent history"),
            "sort: descending\n> Go to move #1 (col 2, row 2)\n  Go to game start"
        );
    }
}
