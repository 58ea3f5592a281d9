//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Coordinates that do not name a square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid square: file {file}, rank {rank} (both must be in 0..=7)")]
pub struct InvalidSquare {
    pub file: i32,
    pub rank: i32,
}

/// A square on the chess board.
///
/// Stored as a validated index in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// File 0 is the a-file and rank 0 is White's home rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank coordinates.
    ///
    /// Coordinates outside `0..=7` are rejected instead of wrapping.
    pub fn new(file: i32, rank: i32) -> Result<Self, InvalidSquare> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square((rank * 8 + file) as u8))
        } else {
            Err(InvalidSquare { file, rank })
        }
    }

    /// Creates a square from coordinates already known to be on the board.
    #[inline]
    const fn at(file: u8, rank: u8) -> Self {
        Square(rank * 8 + file)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::at(file - b'a', rank - b'1'))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the file (0 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square `df` files and `dr` ranks away, or `None` when that
    /// would leave the board.
    ///
    /// Every relative step the engine takes goes through here.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square::at(file as u8, rank as u8))
        }
    }

    /// Iterates every square in file-major order: a1, a2, ..., a8, b1, ..., h8.
    pub fn file_major() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|file| (0..8u8).map(move |rank| Square::at(file, rank)))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }

    // Common squares
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl TryFrom<(i32, i32)> for Square {
    type Error = InvalidSquare;

    fn try_from((file, rank): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 3).unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn square_new_rejects_out_of_range() {
        assert_eq!(Square::new(8, 0), Err(InvalidSquare { file: 8, rank: 0 }));
        assert_eq!(Square::new(0, -1), Err(InvalidSquare { file: 0, rank: -1 }));
        assert!(Square::try_from((-3, 9)).is_err());
        assert_eq!(Square::try_from((7, 7)), Ok(Square::H8));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Square::new(4, 3).ok());
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "a1");
        assert_eq!(Square::H8.to_algebraic(), "h8");
        assert_eq!(format!("{:?}", Square::E1), "Square(e1)");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::A1.offset(1, 2), Square::from_algebraic("b3"));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::H1.offset(1, 1), None);
    }

    #[test]
    fn file_major_order() {
        let order: Vec<Square> = Square::file_major().collect();
        assert_eq!(order.len(), 64);
        assert_eq!(order[0], Square::A1);
        assert_eq!(order[1], Square::from_algebraic("a2").unwrap());
        assert_eq!(order[8], Square::B1);
        assert_eq!(order[63], Square::H8);
    }

    proptest::proptest! {
        #[test]
        fn prop_offset_agrees_with_new(index in 0u8..64, df in -8i8..=8, dr in -8i8..=8) {
            let sq = Square::from_index(index).unwrap();
            let expected = Square::new(sq.file() as i32 + df as i32, sq.rank() as i32 + dr as i32).ok();
            proptest::prop_assert_eq!(sq.offset(df, dr), expected);
        }

        #[test]
        fn prop_algebraic_roundtrip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            proptest::prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
        }
    }
}
