//! Move representation.

use crate::Square;
use std::fmt;

/// A move as an origin/destination pair.
///
/// Special effects (castling rook hop, en passant removal, promotion) are
/// implied by the position the move is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl From<(Square, Square)> for Move {
    fn from((from, to): (Square, Square)) -> Self {
        Move { from, to }
    }
}

impl From<Move> for (Square, Square) {
    fn from(m: Move) -> Self {
        (m.from, m.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}-{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_pair_conversion() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();
        let m = Move::from((e2, e4));
        assert_eq!(m, Move::new(e2, e4));
        assert_eq!(<(Square, Square)>::from(m), (e2, e4));
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(Square::G1, Square::from_algebraic("f3").unwrap());
        assert_eq!(format!("{:?}", m), "Move(g1-f3)");
        assert_eq!(format!("{}", m), "g1-f3");
    }
}
