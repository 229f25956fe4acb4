use crate::{bitboard::Bitboard, board::Board, types::*};

/// Squares where `own` could place a disc: every empty square that closes a
/// run of `opp` discs against an `own` disc in some direction.
pub fn legal_mask(own: Bitboard, opp: Bitboard) -> Bitboard {
    let empty = !(own | opp);
    let mut moves = Bitboard::EMPTY;
    for shift in Bitboard::DIRECTIONS {
        // A run can be at most six discs long on an 8x8 board.
        let mut run = shift(own) & opp;
        for _ in 0..5 {
            run |= shift(run) & opp;
        }
        moves |= shift(run) & empty;
    }
    moves
}

/// Discs of `opp` flipped when `own` places on `sq`. Empty if the placement
/// brackets nothing.
pub fn flips(own: Bitboard, opp: Bitboard, sq: u8) -> Bitboard {
    let placed = Bitboard::from_square(sq);
    let mut flipped = Bitboard::EMPTY;
    for shift in Bitboard::DIRECTIONS {
        let mut line = Bitboard::EMPTY;
        let mut cursor = shift(placed);
        while !(cursor & opp).is_empty() {
            line |= cursor;
            cursor = shift(cursor);
        }
        if !(cursor & own).is_empty() {
            flipped |= line;
        }
    }
    flipped
}

/// Generate all legal placements for `side`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate legal placements into the provided buffer, reusing it across calls.
///
/// Moves come out in ascending square order (a1, b1, ..., h8), which is the
/// order the search uses to break ties.
pub fn legal_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    let mask = legal_mask(board.discs(side), board.discs(side.opponent()));
    out.extend(mask.map(Move::from_square));
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
