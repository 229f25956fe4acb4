use crate::{
    board::{Board, GameBoard},
    movegen::legal_moves_into,
    types::{Move, Side},
};

/// Pure perft node count.
///
/// Counts the leaves of the game tree `depth` plies below `board` with `side`
/// to move. A side without placements passes, which uses up a ply; a position
/// where neither side can move is a leaf regardless of the remaining depth.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    fn inner(board: &Board, side: Side, depth: u8, passed: bool, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = match layers.split_first_mut() {
            Some(split) => split,
            None => return 1,
        };

        legal_moves_into(board, side, buf);
        if buf.is_empty() {
            if passed {
                return 1;
            }
            return inner(board, side.opponent(), depth - 1, true, rest);
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.clone();
            if child.apply(mv, side).is_err() {
                continue;
            }
            nodes += inner(&child, side.opponent(), depth - 1, false, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, false, &mut layers[..])
}
