//! Core types for chess.
//!
//! This crate provides the data model shared by the engine and its hosts:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for validated board coordinates
//! - [`Board`], [`CastlingRights`] and [`GameState`] for positions
//! - [`Move`] for origin/destination pairs
//! - FEN snapshots of a [`GameState`]

mod board;
mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod square;
mod state;

pub use board::Board;
pub use castling::{CastleSide, CastlingRights};
pub use color::Color;
pub use fen::{FenError, STARTPOS};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{InvalidSquare, Square};
pub use state::GameState;
