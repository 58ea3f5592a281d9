//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Promotion is always to a queen, so reference positions whose counts
//! include under-promotions only match up to the depth before the first one.

use super::{generate_legal_moves, GenerationResult};
use crate::apply_move;
use chess_core::{GameState, Move};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let map = match generate_legal_moves(state) {
        GenerationResult::Moves(map) => map,
        GenerationResult::GameOver { .. } => return 0,
    };

    if depth == 1 {
        return map.len() as u64;
    }

    map.moves()
        .filter_map(|m| apply_move(state, m.from, m.to).ok())
        .map(|child| perft(&child, depth - 1))
        .sum()
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(Move, u64)> {
    let map = match generate_legal_moves(state) {
        GenerationResult::Moves(map) => map,
        GenerationResult::GameOver { .. } => return Vec::new(),
    };

    map.moves()
        .filter_map(|m| {
            let child = apply_move(state, m.from, m.to).ok()?;
            let nodes = if depth > 1 { perft(&child, depth - 1) } else { 1 };
            Some((m, nodes))
        })
        .collect()
}
