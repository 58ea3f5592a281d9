//! Legal move generation.
//!
//! Each piece of the side to move produces pseudo-legal destinations, and
//! every candidate is then played on a copy of the board to check that the
//! mover's king is not left attacked.

mod attacks;
pub mod perft;

use chess_core::{Board, CastleSide, Color, GameState, Move, Piece, PieceKind, Square};

use attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
pub use attacks::{is_in_check, is_square_attacked};

/// Legal destinations per origin square for the side to move.
///
/// Only squares holding a piece with at least one legal destination have an
/// entry. Entries are kept in the canonical order: origin squares file-major
/// (a1, a2, ..., h8), destinations in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalityMap {
    entries: Vec<(Square, Vec<Square>)>,
}

impl LegalityMap {
    /// Destinations for the piece on `from`, or `None` if it has no legal move.
    pub fn get(&self, from: Square) -> Option<&[Square]> {
        self.entries
            .iter()
            .find(|(sq, _)| *sq == from)
            .map(|(_, dests)| dests.as_slice())
    }

    /// Returns true if `from -> to` is a legal move.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.get(from).is_some_and(|dests| dests.contains(&to))
    }

    /// Iterates origin squares with their destination lists.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.entries
            .iter()
            .map(|(from, dests)| (*from, dests.as_slice()))
    }

    /// Iterates every legal move in canonical order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries
            .iter()
            .flat_map(|(from, dests)| dests.iter().map(move |to| Move::new(*from, *to)))
    }

    /// Total number of legal moves.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, dests)| dests.len()).sum()
    }

    /// Returns true if no move is available.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of move generation for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// The side to move has at least one legal move.
    Moves(LegalityMap),
    /// The side to move has no legal move; checkmate if its king is attacked,
    /// stalemate otherwise.
    GameOver { is_checkmate: bool },
}

impl GenerationResult {
    /// Returns the legality map, or `None` once the game is over.
    pub fn legality_map(&self) -> Option<&LegalityMap> {
        match self {
            GenerationResult::Moves(map) => Some(map),
            GenerationResult::GameOver { .. } => None,
        }
    }

    /// Returns true for checkmate or stalemate.
    pub fn is_game_over(&self) -> bool {
        matches!(self, GenerationResult::GameOver { .. })
    }

    /// Returns true if `from -> to` is legal.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.legality_map()
            .is_some_and(|map| map.contains(from, to))
    }
}

/// Display category of a legal destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Quiet move onto an empty square.
    Normal,
    /// Destination holds an enemy piece.
    Capture,
    /// En passant, pawn double push or castling hop.
    Special,
}

/// Generates all legal moves for the side to move.
pub fn generate_legal_moves(state: &GameState) -> GenerationResult {
    let us = state.side_to_move;
    let king = state.board.king_square(us);
    let mut entries = Vec::new();

    for from in Square::file_major() {
        let piece = match state.board.get(from) {
            Some(p) if p.color == us => p,
            _ => continue,
        };

        let mut dests = pseudo_legal_destinations(state, from, piece);
        dests.retain(|&to| {
            let guarded = if piece.kind == PieceKind::King {
                Some(to)
            } else {
                king
            };
            guarded.map_or(true, |king_sq| {
                let trial = trial_board(&state.board, from, to, piece);
                !is_square_attacked(&trial, king_sq, us)
            })
        });

        if !dests.is_empty() {
            entries.push((from, dests));
        }
    }

    if entries.is_empty() {
        GenerationResult::GameOver {
            is_checkmate: is_in_check(state),
        }
    } else {
        GenerationResult::Moves(LegalityMap { entries })
    }
}

/// Labels a legal destination for highlighting.
pub fn classify_move(state: &GameState, from: Square, to: Square) -> MoveKind {
    if state.board.get(to).is_some() {
        return MoveKind::Capture;
    }
    match state.board.get(from).map(|p| p.kind) {
        Some(PieceKind::Pawn) if from.file() != to.file() => MoveKind::Special,
        Some(PieceKind::Pawn) if from.rank().abs_diff(to.rank()) == 2 => MoveKind::Special,
        Some(PieceKind::King) if from.file().abs_diff(to.file()) == 2 => MoveKind::Special,
        _ => MoveKind::Normal,
    }
}

/// Plays `from -> to` on a copy of the board, including the removal of a pawn
/// taken en passant. Promotion and the castling rook are irrelevant here.
fn trial_board(board: &Board, from: Square, to: Square, piece: Piece) -> Board {
    let mut trial = *board;
    if let Some(captured) = en_passant_victim(board, from, to, piece) {
        trial.set(captured, None);
    }
    trial.set(from, None);
    trial.set(to, Some(piece));
    trial
}

/// Square of the pawn removed when `piece` moves diagonally onto an empty
/// square, i.e. captures en passant.
pub(crate) fn en_passant_victim(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
) -> Option<Square> {
    if piece.kind == PieceKind::Pawn && from.file() != to.file() && board.get(to).is_none() {
        to.offset(0, -piece.color.pawn_direction())
    } else {
        None
    }
}

fn pseudo_legal_destinations(state: &GameState, from: Square, piece: Piece) -> Vec<Square> {
    let board = &state.board;
    let mut dests = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(state, from, piece.color, &mut dests),
        PieceKind::Knight => step_destinations(board, from, piece.color, &KNIGHT_OFFSETS, &mut dests),
        PieceKind::Bishop => ray_destinations(board, from, piece.color, &DIAGONALS, &mut dests),
        PieceKind::Rook => ray_destinations(board, from, piece.color, &ORTHOGONALS, &mut dests),
        PieceKind::Queen => {
            ray_destinations(board, from, piece.color, &ORTHOGONALS, &mut dests);
            ray_destinations(board, from, piece.color, &DIAGONALS, &mut dests);
        }
        PieceKind::King => {
            step_destinations(board, from, piece.color, &KING_OFFSETS, &mut dests);
            castling_destinations(state, from, piece.color, &mut dests);
        }
    }
    dests
}

fn pawn_destinations(state: &GameState, from: Square, us: Color, dests: &mut Vec<Square>) {
    let board = &state.board;
    let forward = us.pawn_direction();

    if let Some(one) = from.offset(0, forward) {
        if board.get(one).is_none() {
            dests.push(one);
            if from.rank() == us.pawn_rank() {
                if let Some(two) = one.offset(0, forward) {
                    if board.get(two).is_none() {
                        dests.push(two);
                    }
                }
            }
        }
    }

    for df in [1, -1] {
        if let Some(to) = from.offset(df, forward) {
            if board.is_color(to, us.opposite()) {
                dests.push(to);
            }
        }
    }

    if let Some(ep) = state.en_passant {
        for df in [1, -1] {
            if from.offset(df, forward) == Some(ep) && board.get(ep).is_none() {
                dests.push(ep);
            }
        }
    }
}

fn step_destinations(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    dests: &mut Vec<Square>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if !board.is_color(to, us) {
                dests.push(to);
            }
        }
    }
}

fn ray_destinations(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    dests: &mut Vec<Square>,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.get(to) {
                None => dests.push(to),
                Some(p) => {
                    if p.color != us {
                        dests.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn castling_destinations(state: &GameState, from: Square, us: Color, dests: &mut Vec<Square>) {
    let board = &state.board;
    let home = match us {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    };
    if from != home {
        return;
    }

    for side in [CastleSide::King, CastleSide::Queen] {
        if !state.castling.has(us, side) {
            continue;
        }

        let along = |file: u8| home.offset(file as i8 - home.file() as i8, 0);
        let (Some(rook_sq), Some(king_to)) = (along(side.rook_file()), along(side.king_to_file()))
        else {
            continue;
        };
        if board.get(rook_sq) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }

        // Between squares must be empty. Neither the king's square nor the
        // squares it crosses may be attacked.
        let (between, transit): (&[u8], [u8; 2]) = match side {
            CastleSide::King => (&[5, 6][..], [5, 6]),
            CastleSide::Queen => (&[1, 2, 3][..], [3, 2]),
        };
        if between
            .iter()
            .filter_map(|&file| along(file))
            .any(|sq| board.get(sq).is_some())
        {
            continue;
        }
        if is_square_attacked(board, home, us)
            || transit
                .iter()
                .filter_map(|&file| along(file))
                .any(|sq| is_square_attacked(board, sq, us))
        {
            continue;
        }

        dests.push(king_to);
    }
}
