//! Game session with history tracking.
//!
//! The [`Game`] struct wraps the stateless engine functions for an
//! interactive surface:
//! - Cached legal moves for the current position
//! - Illegal attempts ignored without touching the position
//! - Bot moves through a [`Searcher`]
//! - Undo back to any earlier position

use crate::movegen::{classify_move, generate_legal_moves, is_in_check, GenerationResult, MoveKind};
use crate::search::Searcher;
use crate::apply_move;
use chess_core::{Color, GameState, Move, Square};
use tracing::{debug, info};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White delivered checkmate.
    WhiteWins,
    /// Black delivered checkmate.
    BlackWins,
    /// Draw with a specific reason.
    Draw(DrawReason),
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Stalemate - no legal moves but not in check.
    Stalemate,
}

/// What happened to a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal and is now part of the game.
    Played,
    /// The move was illegal or the game is over; nothing changed.
    Ignored,
}

/// A chess game with history tracking.
///
/// Every accepted move pushes the previous [`GameState`] onto the history, so
/// [`Game::undo`] is a pop.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    state: GameState,
    /// Legal moves of the current position.
    legal: GenerationResult,
    /// Positions before each played move.
    previous: Vec<GameState>,
    /// Played moves, oldest first.
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Creates a game from a custom starting position.
    pub fn from_state(state: GameState) -> Self {
        let legal = generate_legal_moves(&state);
        Game {
            state,
            legal,
            previous: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, chess_core::FenError> {
        Ok(Self::from_state(GameState::from_fen(fen)?))
    }

    /// Returns the current position.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the legal moves of the current position.
    pub fn legal_moves(&self) -> &GenerationResult {
        &self.legal
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.state)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.legal {
            GenerationResult::Moves(_) => None,
            GenerationResult::GameOver { is_checkmate: false } => {
                Some(GameResult::Draw(DrawReason::Stalemate))
            }
            GenerationResult::GameOver { is_checkmate: true } => {
                Some(match self.state.side_to_move {
                    Color::White => GameResult::BlackWins,
                    Color::Black => GameResult::WhiteWins,
                })
            }
        }
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.legal.is_game_over()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Labels a destination of the current position for highlighting.
    pub fn classify(&self, from: Square, to: Square) -> MoveKind {
        classify_move(&self.state, from, to)
    }

    /// Plays `from -> to` if it is legal in the current position.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if !self.legal.contains(from, to) {
            debug!(%from, %to, fen = %self.state.to_fen(), "move ignored");
            return MoveOutcome::Ignored;
        }

        match apply_move(&self.state, from, to) {
            Ok(next) => {
                self.commit(Move::new(from, to), next);
                MoveOutcome::Played
            }
            Err(err) => {
                debug!(%err, "move ignored");
                MoveOutcome::Ignored
            }
        }
    }

    /// Lets `searcher` pick a move for the side to move and plays it.
    ///
    /// Returns `None` if the game is already over.
    pub fn play_bot(&mut self, searcher: &Searcher) -> Option<Move> {
        let report = searcher.search(&self.state)?;
        let m = report.best;
        match self.try_move(m.from, m.to) {
            MoveOutcome::Played => Some(m),
            MoveOutcome::Ignored => None,
        }
    }

    /// Takes back the last move. Returns false if nothing was played.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.previous.pop() else {
            return false;
        };
        self.moves.pop();
        self.legal = generate_legal_moves(&state);
        self.state = state;
        true
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }

    fn commit(&mut self, m: Move, next: GameState) {
        let prev = std::mem::replace(&mut self.state, next);
        self.previous.push(prev);
        self.moves.push(m);
        self.legal = generate_legal_moves(&self.state);

        if let Some(result) = self.result() {
            info!(?result, plies = self.ply_count(), "game over");
        }
    }
}
