//! Move application.

use crate::movegen::en_passant_victim;
use crate::EngineError;
use chess_core::{CastleSide, Color, GameState, Piece, PieceKind, Square};

/// Plays `from -> to` and returns the successor state.
///
/// The move is assumed to come from the legality map of `state`; legality is
/// not checked again. Castling is recognised by a two-file king hop, en
/// passant by a pawn moving diagonally onto an empty square. Pawns reaching
/// the far rank always become queens.
///
/// # Errors
///
/// Returns [`EngineError::EmptySquare`] if `from` holds no piece.
pub fn apply_move(state: &GameState, from: Square, to: Square) -> Result<GameState, EngineError> {
    let piece = state
        .board
        .get(from)
        .ok_or(EngineError::EmptySquare(from))?;

    let mut next = state.clone();
    next.en_passant = None;

    if piece.kind == PieceKind::Pawn {
        if from.rank().abs_diff(to.rank()) == 2 {
            next.en_passant = from.offset(0, piece.color.pawn_direction());
        }
        if let Some(victim) = en_passant_victim(&state.board, from, to, piece) {
            next.board.set(victim, None);
        }
    }

    let placed = if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    };

    if piece.kind == PieceKind::King {
        next.castling.remove_color(piece.color);
        let hop = to.file() as i8 - from.file() as i8;
        if hop.abs() == 2 {
            let side = if hop > 0 {
                CastleSide::King
            } else {
                CastleSide::Queen
            };
            relocate_castling_rook(&mut next, from, side);
        }
    }

    next.castling.remove_corner(from);
    next.castling.remove_corner(to);

    next.board.set(from, None);
    next.board.set(to, Some(placed));

    next.side_to_move = piece.color.opposite();
    if next.side_to_move == Color::White {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    Ok(next)
}

/// Moves the castling rook next to the king on the king's rank.
fn relocate_castling_rook(state: &mut GameState, king_from: Square, side: CastleSide) {
    let along = |file: u8| king_from.offset(file as i8 - king_from.file() as i8, 0);
    if let (Some(rook_from), Some(rook_to)) = (along(side.rook_file()), along(side.rook_to_file())) {
        let rook = state.board.take(rook_from);
        state.board.set(rook_to, rook);
    }
}
