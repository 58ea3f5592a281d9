//! Attack detection by scanning outward from a target square.
//!
//! The board passed in is usually hypothetical: the caller has already played
//! a trial move on a copy and asks whether its king survives.

use chess_core::{Board, Color, GameState, PieceKind, Square};

/// Knight jump offsets (file, rank), in generation order.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King step offsets (file, rank), in generation order.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Diagonal ray directions, in generation order.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal ray directions, in generation order.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns true if a piece of `owner`'s opponent attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, owner: Color) -> bool {
    let enemy = owner.opposite();
    let is_enemy = |sq: Square, kinds: &[PieceKind]| {
        matches!(board.get(sq), Some(p) if p.color == enemy && kinds.contains(&p.kind))
    };

    // Pawns strike from the two squares diagonally in front of the target
    let forward = owner.pawn_direction();
    for df in [1, -1] {
        if let Some(sq) = target.offset(df, forward) {
            if is_enemy(sq, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(df, dr) {
            if is_enemy(sq, &[PieceKind::Knight]) {
                return true;
            }
        }
    }

    for (df, dr) in DIAGONALS {
        if let Some(sq) = first_occupied(board, target, df, dr) {
            if is_enemy(sq, &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
        }
    }

    for (df, dr) in ORTHOGONALS {
        if let Some(sq) = first_occupied(board, target, df, dr) {
            if is_enemy(sq, &[PieceKind::Rook, PieceKind::Queen]) {
                return true;
            }
        }
    }

    for (df, dr) in KING_OFFSETS {
        if let Some(sq) = target.offset(df, dr) {
            if is_enemy(sq, &[PieceKind::King]) {
                return true;
            }
        }
    }

    false
}

/// Returns true if the side to move's king is attacked on the real board.
pub fn is_in_check(state: &GameState) -> bool {
    let us = state.side_to_move;
    state
        .board
        .king_square(us)
        .is_some_and(|king| is_square_attacked(&state.board, king, us))
}

/// Walks a ray from `from` and returns the first occupied square, if any.
fn first_occupied(board: &Board, from: Square, df: i8, dr: i8) -> Option<Square> {
    let mut current = from;
    while let Some(next) = current.offset(df, dr) {
        if board.get(next).is_some() {
            return Some(next);
        }
        current = next;
    }
    None
}
