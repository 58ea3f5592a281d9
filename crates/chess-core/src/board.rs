//! Mailbox board: one optional piece per square.

use crate::{Color, InvalidSquare, Piece, PieceKind, Square};
use std::fmt;

/// An 8x8 board mapping each square to an optional piece.
///
/// The board is a small `Copy` array, so a trial move is a plain copy that is
/// modified and thrown away.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                board.squares[Self::idx(file, color.back_rank())] = Some(Piece::new(*kind, color));
                board.squares[Self::idx(file, color.pawn_rank())] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    const fn idx(file: u8, rank: u8) -> usize {
        (rank * 8 + file) as usize
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Puts a piece on (or clears) a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        matches!(self.get(sq), Some(p) if p.color == color)
    }

    /// Returns the piece at raw coordinates, rejecting anything off the board.
    pub fn piece_at(&self, file: i32, rank: i32) -> Result<Option<Piece>, InvalidSquare> {
        Square::new(file, rank).map(|sq| self.get(sq))
    }

    /// Locates the king of the given color.
    ///
    /// Returns `None` only for boards that were built without one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(PieceKind::King, color));
        Square::file_major().find(|&sq| self.get(sq) == king)
    }

    /// Iterates occupied squares in file-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::file_major().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self.squares[Self::idx(file, rank)]
                    .map(Piece::to_fen_char)
                    .unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
