//! Laws that must hold for every history reachable by play.
//!
//! Walks every legal game prefix up to a fixed depth and checks each law
//! at every node.

use timeline_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use timeline_tictactoe::{Cell, GameHistory, GameStatus, Mark};

const DEPTH: usize = 5;

fn walk(game: &GameHistory, visit: &mut dyn FnMut(&GameHistory)) {
    visit(game);
    if game.cursor() >= DEPTH || game.status().is_terminal() {
        return;
    }
    for index in 0..9 {
        let mut next = game.clone();
        if next.play_move(index).is_ok() {
            walk(&next, visit);
        }
    }
}

#[test]
fn test_x_leads_by_at_most_one() {
    walk(&GameHistory::new(), &mut |game| {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        assert!(x == o || x == o + 1, "x={} o={}", x, o);
    });
}

#[test]
fn test_turn_follows_cursor_parity() {
    walk(&GameHistory::new(), &mut |game| {
        let mut game = game.clone();
        for ply in 0..game.len() {
            game.jump_to(ply).expect("ply exists");
            if let GameStatus::InProgress(mark) = game.status() {
                assert_eq!(mark == Mark::X, ply % 2 == 0);
                assert_eq!(mark, game.current_mark());
            }
        }
    });
}

#[test]
fn test_branch_truncation() {
    walk(&GameHistory::new(), &mut |game| {
        let len = game.len();
        for cursor in 0..len.saturating_sub(1) {
            let mut branched = game.clone();
            branched.jump_to(cursor).expect("ply exists");
            if branched.status().is_terminal() {
                continue;
            }
            let Some(index) = (0..9).find(|i| branched.board().get_index(*i) == Some(Cell::Empty))
            else {
                continue;
            };

            assert_eq!(branched.play_move(index), Ok(cursor + 1));
            assert_eq!(branched.len(), cursor + 2);
            assert_eq!(
                &branched.snapshots()[..=cursor],
                &game.snapshots()[..=cursor]
            );
        }
    });
}

#[test]
fn test_every_ply_has_a_label() {
    walk(&GameHistory::new(), &mut |game| {
        for ply in 1..game.len() {
            let label = game.describe_move(ply).expect("consistent history");
            assert_eq!(label.ply(), ply);
        }
    });
}

#[test]
fn test_invariants_hold_everywhere() {
    walk(&GameHistory::new(), &mut |game| {
        assert!(HistoryInvariants::check_all(game).is_ok());
    });
}
