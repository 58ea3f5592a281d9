//! Castling rights.

use crate::{Color, Square};

/// Castling rights flags, one per (color, side) pair.
///
/// The engine only ever clears flags; nothing re-grants a right once lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

/// Which wing of the board a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_to_file(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queen) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::King) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queen) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` still holds the right to castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.has(color, CastleSide::King)
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.has(color, CastleSide::Queen)
    }

    /// Removes one right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    /// Clears the right tied to a rook home corner (a1, h1, a8, h8).
    ///
    /// Any other square is ignored. The square alone decides; whose piece
    /// stands there is not consulted.
    pub fn remove_corner(&mut self, sq: Square) {
        match sq {
            Square::H1 => self.remove(Color::White, CastleSide::King),
            Square::A1 => self.remove(Color::White, CastleSide::Queen),
            Square::H8 => self.remove(Color::Black, CastleSide::King),
            Square::A8 => self.remove(Color::Black, CastleSide::Queen),
            _ => {}
        }
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_rights() {
        let mut rights = CastlingRights::ALL;
        assert!(rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::Black));

        rights.remove(Color::White, CastleSide::King);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::White));
    }

    #[test]
    fn castling_rights_remove_color() {
        let mut rights = CastlingRights::ALL;
        rights.remove_color(Color::White);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(rights.can_castle_kingside(Color::Black));
        assert!(rights.can_castle_queenside(Color::Black));
    }

    #[test]
    fn remove_corner() {
        let mut rights = CastlingRights::ALL;
        rights.remove_corner(Square::A8);
        assert!(!rights.can_castle_queenside(Color::Black));
        assert!(rights.can_castle_kingside(Color::Black));

        rights.remove_corner(Square::E1);
        assert_eq!(rights.raw(), 0b0111);

        rights.remove_corner(Square::H1);
        assert_eq!(rights.raw(), 0b0110);
    }

    #[test]
    fn castling_rights_none() {
        let rights = CastlingRights::NONE;
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(!rights.can_castle_kingside(Color::Black));
        assert!(!rights.can_castle_queenside(Color::Black));
        assert_eq!(rights.raw(), 0);
    }

    #[test]
    fn castle_side_files() {
        assert_eq!(CastleSide::King.rook_file(), 7);
        assert_eq!(CastleSide::King.king_to_file(), 6);
        assert_eq!(CastleSide::King.rook_to_file(), 5);
        assert_eq!(CastleSide::Queen.rook_file(), 0);
        assert_eq!(CastleSide::Queen.king_to_file(), 2);
        assert_eq!(CastleSide::Queen.rook_to_file(), 3);
    }
}
