//! FEN (Forsyth-Edwards Notation) snapshots of a [`GameState`].
//!
//! FEN is the persistence format for positions. The state model keeps no
//! halfmove clock, so that field is accepted on input and written as `0`.

use crate::{Board, CastlingRights, Color, GameState, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) fn parse(fen: &str) -> Result<GameState, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&parts.len()) {
        return Err(FenError::InvalidPartCount(parts.len()));
    }

    let board = parse_placement(parts[0])?;

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidActiveColor(other.to_string())),
    };

    let castling = parse_castling(parts[2])?;
    let en_passant = parse_en_passant(parts[3], &board, side_to_move)?;

    if let Some(halfmove) = parts.get(4) {
        halfmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(halfmove.to_string()))?;
    }

    let fullmove_number = match parts.get(5) {
        Some(s) => match s.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(FenError::InvalidFullmoveNumber(s.to_string())),
        },
        None => 1,
    };

    Ok(GameState {
        board,
        en_passant,
        castling,
        side_to_move,
        fullmove_number,
    })
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i as i32; // FEN starts from rank 8
        let mut file = 0i32;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                file += digit as i32;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or_else(|| {
                FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    rank + 1
                ))
            })?;
            let sq = Square::new(file, rank).map_err(|_| {
                FenError::InvalidPiecePlacement(format!("rank {} has too many squares", rank + 1))
            })?;
            board.set(sq, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank + 1,
                file
            )));
        }
    }

    Ok(board)
}

fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
    if castling == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut flags = 0u8;
    for c in castling.chars() {
        flags |= match c {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )))
            }
        };
    }
    Ok(CastlingRights::new(flags))
}

/// The target must be the empty square just behind a pawn of the side that
/// moved last, on the rank that pawn skipped.
fn parse_en_passant(ep: &str, board: &Board, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if ep == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassantSquare(ep.to_string());
    let sq = Square::from_algebraic(ep).ok_or_else(invalid)?;
    if sq.rank() != side_to_move.relative_rank(5) || board.get(sq).is_some() {
        return Err(invalid());
    }

    let pushed = Piece::new(PieceKind::Pawn, side_to_move.opposite());
    match sq.offset(0, -side_to_move.pawn_direction()) {
        Some(behind) if board.get(behind) == Some(pushed) => Ok(Some(sq)),
        _ => Err(invalid()),
    }
}

pub(crate) fn write(state: &GameState) -> String {
    let mut fen = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0;
        for file in 0..8 {
            let piece = state.board.piece_at(file, rank).ok().flatten();
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    let castling = state.castling;
    if castling.raw() == 0 {
        fen.push('-');
    } else {
        if castling.can_castle_kingside(Color::White) {
            fen.push('K');
        }
        if castling.can_castle_queenside(Color::White) {
            fen.push('Q');
        }
        if castling.can_castle_kingside(Color::Black) {
            fen.push('k');
        }
        if castling.can_castle_queenside(Color::Black) {
            fen.push('q');
        }
    }

    fen.push(' ');
    match state.en_passant {
        Some(sq) => fen.push_str(&sq.to_algebraic()),
        None => fen.push('-'),
    }

    fen.push_str(" 0 ");
    fen.push_str(&state.fullmove_number.to_string());

    fen
}
