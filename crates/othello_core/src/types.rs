use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};

/// Width and height of the standard board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first in the standard opening (black).
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// A disc placement, or the pass sentinel for a side without legal moves.
///
/// `x` is the column and `y` the row; `(0, 0)` is the `a1` corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place { x: u8, y: u8 },
    Pass,
}

impl Move {
    pub const fn new(x: u8, y: u8) -> Self {
        Move::Place { x, y }
    }

    /// Like [`Move::new`] but rejects coordinates outside an 8x8 board.
    pub fn checked(x: u8, y: u8) -> Result<Self> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(OthelloError::OutOfBounds {
                x,
                y,
                size: BOARD_SIZE,
            });
        }
        Ok(Move::Place { x, y })
    }

    pub const fn from_square(sq: u8) -> Self {
        Move::Place {
            x: sq % BOARD_SIZE,
            y: sq / BOARD_SIZE,
        }
    }

    /// Bit index of the placement (`y * 8 + x`), `None` for a pass or an
    /// off-board coordinate.
    pub fn square(self) -> Option<u8> {
        match self {
            Move::Place { x, y } if x < BOARD_SIZE && y < BOARD_SIZE => Some(y * BOARD_SIZE + x),
            _ => None,
        }
    }

    pub fn coords(self) -> Option<(u8, u8)> {
        match self {
            Move::Place { x, y } => Some((x, y)),
            Move::Pass => None,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::move_to_text(*self))
    }
}

/// Square index of `(x, y)`, `None` off the board.
pub fn sq(x: i8, y: i8) -> Option<u8> {
    let n = BOARD_SIZE as i8;
    if (0..n).contains(&x) && (0..n).contains(&y) {
        Some((y as u8) * BOARD_SIZE + (x as u8))
    } else {
        None
    }
}
