use std::fmt;

use crate::{
    bitboard::Bitboard,
    error::{OthelloError, Result},
    movegen::{flips, legal_mask, legal_moves},
    types::*,
};

/// The operations the search needs from a game position.
///
/// `Clone` must produce a fully independent copy: mutating the clone never
/// affects the original.
pub trait GameBoard: Clone {
    /// Width (and height) of the square board.
    fn size(&self) -> u8;

    /// Legal placements for `side`, in a fixed order. Empty if `side` must pass.
    fn legal_moves(&self, side: Side) -> Vec<Move>;

    fn has_any_move(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Number of legal placements for `side`.
    fn mobility(&self, side: Side) -> u32 {
        self.legal_moves(side).len() as u32
    }

    /// Plays `mv` for `side` in place and returns the number of discs flipped.
    ///
    /// `mv` must be one of `legal_moves(side)`, or `Move::Pass` when that list
    /// is empty. Anything else is rejected and leaves the board untouched.
    fn apply(&mut self, mv: Move, side: Side) -> Result<u32>;

    /// Number of discs `side` has on the board.
    fn count_of(&self, side: Side) -> u32;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    discs: [Bitboard; 2],
}

impl Board {
    /// Standard opening: d4 and e5 for `Second`, e4 and d5 for `First`.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.discs[Side::Second.idx()] = Bitboard::from_square(27) | Bitboard::from_square(36);
        board.discs[Side::First.idx()] = Bitboard::from_square(28) | Bitboard::from_square(35);
        board
    }

    pub fn empty() -> Self {
        Board {
            discs: [Bitboard::EMPTY; 2],
        }
    }

    /// Parses an 8x8 diagram of `X` (first), `O` (second) and `.` (empty).
    ///
    /// Whitespace is ignored. The first row of the diagram is row 1 (`y = 0`)
    /// and each row reads from column a to column h.
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        let expected = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
        if cells.len() != expected {
            return Err(OthelloError::Diagram(format!(
                "expected {} cells, found {}",
                expected,
                cells.len()
            )));
        }

        let mut board = Board::empty();
        for (i, ch) in cells.into_iter().enumerate() {
            let side = match ch {
                'X' | 'x' | 'B' | 'b' => Some(Side::First),
                'O' | 'o' | 'W' | 'w' => Some(Side::Second),
                '.' | '-' => None,
                other => {
                    return Err(OthelloError::Diagram(format!(
                        "unexpected character '{other}'"
                    )));
                }
            };
            if let Some(side) = side {
                board.discs[side.idx()].set(i as u8);
            }
        }
        Ok(board)
    }

    /// Renders the board in the format accepted by [`Board::from_diagram`].
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(128);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if x > 0 {
                    out.push(' ');
                }
                out.push(self.cell(x, y).map_or('.', Side::symbol));
            }
            out.push('\n');
        }
        out
    }

    pub fn discs(&self, side: Side) -> Bitboard {
        self.discs[side.idx()]
    }

    /// Owner of `(x, y)`; `None` for an empty or off-board square.
    pub fn cell(&self, x: u8, y: u8) -> Option<Side> {
        let sq = Move::new(x, y).square()?;
        Side::BOTH
            .into_iter()
            .find(|side| self.discs[side.idx()].contains(sq))
    }

    pub fn occupied(&self) -> Bitboard {
        self.discs[0] | self.discs[1]
    }

    pub fn empties(&self) -> u32 {
        (!self.occupied()).popcount()
    }

    /// Neither side can place a disc.
    pub fn is_game_over(&self) -> bool {
        !self.has_any_move(Side::First) && !self.has_any_move(Side::Second)
    }

    /// Side with more discs, `None` on a tie. Only meaningful once the game is over.
    pub fn winner(&self) -> Option<Side> {
        let first = self.count_of(Side::First);
        let second = self.count_of(Side::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for Board {
    fn size(&self) -> u8 {
        BOARD_SIZE
    }

    fn legal_moves(&self, side: Side) -> Vec<Move> {
        legal_moves(self, side)
    }

    fn has_any_move(&self, side: Side) -> bool {
        !legal_mask(self.discs(side), self.discs(side.opponent())).is_empty()
    }

    fn mobility(&self, side: Side) -> u32 {
        legal_mask(self.discs(side), self.discs(side.opponent())).popcount()
    }

    fn apply(&mut self, mv: Move, side: Side) -> Result<u32> {
        let sq = match mv {
            Move::Pass => {
                if self.has_any_move(side) {
                    return Err(OthelloError::IllegalPass { side });
                }
                return Ok(0);
            }
            Move::Place { .. } => mv.square().ok_or(OthelloError::IllegalMove { mv, side })?,
        };

        let own = self.discs(side);
        let opp = self.discs(side.opponent());
        if (own | opp).contains(sq) {
            return Err(OthelloError::IllegalMove { mv, side });
        }
        let flipped = flips(own, opp, sq);
        if flipped.is_empty() {
            return Err(OthelloError::IllegalMove { mv, side });
        }

        self.discs[side.idx()] = own | flipped | Bitboard::from_square(sq);
        self.discs[side.opponent().idx()] = opp ^ flipped;
        Ok(flipped.popcount())
    }

    fn count_of(&self, side: Side) -> u32 {
        self.discs(side).popcount()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  a b c d e f g h\n")?;
        for (row, line) in self.to_diagram().lines().enumerate() {
            writeln!(f, "{} {}", row + 1, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
