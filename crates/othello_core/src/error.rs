//! Error type shared by the board, the notation parser and the engines.

use thiserror::Error;

use crate::types::{Move, Side};

/// Errors raised when the board contract is violated or input cannot be read.
///
/// Running out of legal moves is not an error: it is reported as
/// [`Move::Pass`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// A placement that does not flip anything, lands on an occupied square,
    /// or lies off the board.
    #[error("illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },

    /// A pass submitted while the side still had a legal placement.
    #[error("{side} cannot pass while it has a legal move")]
    IllegalPass { side: Side },

    #[error("square ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: u8, y: u8, size: u8 },

    #[error("cannot parse move '{0}'")]
    Parse(String),

    #[error("invalid board diagram: {0}")]
    Diagram(String),
}

pub type Result<T> = std::result::Result<T, OthelloError>;
