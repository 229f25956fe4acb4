use crate::{
    board::GameBoard,
    error::{OthelloError, Result},
    types::*,
};

/// `"d3"` style text for a placement, `"pass"` for a pass.
pub fn move_to_text(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".to_string(),
        Move::Place { x, y } => {
            let col = (b'a' + x) as char;
            format!("{col}{}", y as u32 + 1)
        }
    }
}

/// Parses `"d3"`, `"D3"` or `"pass"`. Only checks the coordinates are on the
/// board, not that the move is legal.
pub fn parse_move(txt: &str) -> Result<Move> {
    let txt = txt.trim();
    if txt.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }

    let b = txt.as_bytes();
    if b.len() != 2 {
        return Err(OthelloError::Parse(txt.to_string()));
    }
    let col = b[0].to_ascii_lowercase();
    let row = b[1];
    let x = col.wrapping_sub(b'a') as i8;
    let y = row.wrapping_sub(b'1') as i8;
    let sq = sq(x, y).ok_or_else(|| OthelloError::Parse(txt.to_string()))?;
    Ok(Move::from_square(sq))
}

/// Parses a move and checks it against the legal moves of `side`.
///
/// `"pass"` is accepted only when `side` has no placement available.
pub fn parse_legal_move<B: GameBoard>(board: &B, side: Side, txt: &str) -> Result<Move> {
    let mv = parse_move(txt)?;
    let legals = board.legal_moves(side);
    match mv {
        Move::Pass if legals.is_empty() => Ok(Move::Pass),
        Move::Pass => Err(OthelloError::IllegalPass { side }),
        place if legals.contains(&place) => Ok(place),
        place => Err(OthelloError::IllegalMove { mv: place, side }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_move_text() {
        assert_eq!(move_to_text(Move::new(3, 2)), "d3");
        assert_eq!(move_to_text(Move::new(0, 0)), "a1");
        assert_eq!(move_to_text(Move::new(7, 7)), "h8");
        assert_eq!(move_to_text(Move::Pass), "pass");
        assert_eq!(Move::new(4, 5).to_string(), "e6");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("d3").unwrap(), Move::new(3, 2));
        assert_eq!(parse_move(" H8 ").unwrap(), Move::new(7, 7));
        assert_eq!(parse_move("PASS").unwrap(), Move::Pass);
        assert!(parse_move("i1").is_err());
        assert!(parse_move("a9").is_err());
        assert!(parse_move("a0").is_err());
        assert!(parse_move("d33").is_err());
        assert!(parse_move("").is_err());
    }

    #[test]
    fn test_parse_legal_move() {
        let board = Board::new();
        assert_eq!(
            parse_legal_move(&board, Side::First, "c4").unwrap(),
            Move::new(2, 3)
        );
        assert_eq!(
            parse_legal_move(&board, Side::First, "a1"),
            Err(OthelloError::IllegalMove {
                mv: Move::new(0, 0),
                side: Side::First
            })
        );
        assert_eq!(
            parse_legal_move(&board, Side::Second, "pass"),
            Err(OthelloError::IllegalPass { side: Side::Second })
        );
    }
}
