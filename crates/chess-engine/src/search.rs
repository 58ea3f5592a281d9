//! Fixed-depth minimax search.
//!
//! Plain minimax without pruning: every legal move is expanded to the
//! configured depth and leaves are scored with [`static_score`]. Positions
//! with no legal move score as a loss for the maximizing side and a win for
//! the minimizing side, whether mate or stalemate.

use crate::eval::static_score;
use crate::movegen::{generate_legal_moves, GenerationResult};
use crate::apply_move;
use chess_core::{Color, GameState, Move};
use tracing::{debug, trace};

/// Search depth used by [`choose_move`].
pub const DEFAULT_DEPTH: u32 = 2;

/// Score of a terminal position for the minimizing side.
pub const SCORE_MAX: i32 = i32::MAX;

/// Score of a terminal position for the maximizing side.
pub const SCORE_MIN: i32 = -i32::MAX;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// The chosen move.
    pub best: Move,
    /// Minimax score of the chosen move.
    pub score: i32,
    /// Number of positions visited below the root.
    pub nodes: u64,
}

/// Minimax searcher with a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u32,
}

impl Searcher {
    /// Creates a searcher for `depth` plies. A depth of 0 is treated as 1.
    pub fn new(depth: u32) -> Self {
        Searcher {
            depth: depth.max(1),
        }
    }

    /// Returns the configured depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Picks a move for the side to move.
    ///
    /// Root moves are tried in canonical order and the first one with the
    /// strictly highest score wins. Returns `None` when there is no legal
    /// move.
    pub fn search(&self, state: &GameState) -> Option<SearchReport> {
        let map = match generate_legal_moves(state) {
            GenerationResult::Moves(map) => map,
            GenerationResult::GameOver { .. } => return None,
        };

        let maximizing = state.side_to_move == Color::White;
        let mut nodes = 0u64;
        let mut best: Option<(Move, i32)> = None;

        for m in map.moves() {
            let Ok(child) = apply_move(state, m.from, m.to) else {
                continue;
            };
            let score = minimax_counted(&child, self.depth - 1, maximizing, &mut nodes);
            trace!(%m, score, "root move");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
        }

        let (best, score) = best?;
        debug!(%best, score, nodes, depth = self.depth, "search finished");
        Some(SearchReport { best, score, nodes })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(DEFAULT_DEPTH)
    }
}

/// Minimax value of `state` searched `depth` plies deep.
pub fn minimax(state: &GameState, depth: u32, maximizing: bool) -> i32 {
    let mut nodes = 0;
    minimax_counted(state, depth, maximizing, &mut nodes)
}

/// Picks a move for the side to move at [`DEFAULT_DEPTH`].
pub fn choose_move(state: &GameState) -> Option<Move> {
    Searcher::default().search(state).map(|report| report.best)
}

fn minimax_counted(state: &GameState, depth: u32, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return static_score(state);
    }

    let map = match generate_legal_moves(state) {
        GenerationResult::Moves(map) => map,
        GenerationResult::GameOver { .. } => {
            return if maximizing { SCORE_MIN } else { SCORE_MAX };
        }
    };

    let scores = map.moves().filter_map(|m| {
        apply_move(state, m.from, m.to)
            .ok()
            .map(|child| minimax_counted(&child, depth - 1, !maximizing, &mut *nodes))
    });

    let best = if maximizing {
        scores.max()
    } else {
        scores.min()
    };
    best.unwrap_or(if maximizing { SCORE_MIN } else { SCORE_MAX })
}
