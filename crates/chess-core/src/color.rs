//! Side to move and the board geometry that depends on it.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a pawn move: +1 for White, -1 for Black.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        self.relative_rank(0)
    }

    /// Rank this side's pawns start on and may double-push from.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        self.relative_rank(1)
    }

    /// Rank where this side's pawns become queens.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.relative_rank(7)
    }

    /// Maps an absolute rank to this side's point of view (own back rank = 0).
    /// The mapping is its own inverse.
    #[inline]
    pub const fn relative_rank(self, rank: u8) -> u8 {
        match self {
            Color::White => rank,
            Color::Black => 7 - rank,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
