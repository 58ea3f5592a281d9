//! Complete game state snapshot.

use crate::fen::{self, FenError};
use crate::{Board, CastlingRights, Color, Square};

/// A game position together with everything needed to continue play.
///
/// Values are never edited after construction by the engine: every move
/// produces a fresh `GameState`, and older values stay valid for re-display
/// or undo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Piece placement.
    pub board: Board,

    /// Square a pawn may move to this ply to capture en passant.
    pub en_passant: Option<Square>,

    /// Castling rights.
    pub castling: CastlingRights,

    /// The side to move.
    pub side_to_move: Color,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl GameState {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            en_passant: None,
            castling: CastlingRights::ALL,
            side_to_move: Color::White,
            fullmove_number: 1,
        }
    }

    /// Creates a state from a board with White to move and no rights.
    pub fn from_board(board: Board) -> Self {
        GameState {
            board,
            en_passant: None,
            castling: CastlingRights::NONE,
            side_to_move: Color::White,
            fullmove_number: 1,
        }
    }

    /// Creates a state from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        fen::parse(fen)
    }

    /// Converts the state to a FEN string.
    pub fn to_fen(&self) -> String {
        fen::write(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
