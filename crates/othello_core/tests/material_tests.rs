//! Disc accounting at the board boundary: the search relies on `apply`
//! moving exactly the flipped discs across and adding the placed one.

use othello_core::{Board, GameBoard, Side};

fn walk(board: &Board, side: Side, depth: u8, checked: &mut u64) {
    if depth == 0 {
        return;
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        if board.has_any_move(side.opponent()) {
            walk(board, side.opponent(), depth - 1, checked);
        }
        return;
    }

    for mv in moves {
        let mover_before = board.count_of(side);
        let opp_before = board.count_of(side.opponent());

        let mut child = board.clone();
        let flipped = child.apply(mv, side).unwrap();

        assert!(flipped >= 1, "{mv} flipped nothing");
        assert_eq!(child.count_of(side), mover_before + flipped + 1);
        assert_eq!(child.count_of(side.opponent()), opp_before - flipped);
        assert_eq!(
            child.count_of(Side::First) + child.count_of(Side::Second),
            mover_before + opp_before + 1
        );
        // The parent is untouched by work on the child.
        assert_eq!(board.count_of(side), mover_before);
        *checked += 1;

        walk(&child, side.opponent(), depth - 1, checked);
    }
}

#[test]
fn every_move_moves_flipped_discs_plus_the_placed_one() {
    let mut checked = 0;
    walk(&Board::new(), Side::First, 5, &mut checked);
    // 4 + 12 + 56 + 244 + 1396 moves in the first five plies
    assert_eq!(checked, 1_712);
}

#[test]
fn has_any_move_agrees_with_legal_moves() {
    let mut board = Board::new();
    let mut side = Side::First;
    for _ in 0..20 {
        for s in Side::BOTH {
            assert_eq!(board.has_any_move(s), !board.legal_moves(s).is_empty());
        }
        let moves = board.legal_moves(side);
        let Some(&mv) = moves.last() else { break };
        board.apply(mv, side).unwrap();
        side = side.opponent();
    }
}
