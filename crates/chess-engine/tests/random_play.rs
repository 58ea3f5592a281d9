//! Property-based tests using proptest.

use chess_core::{GameState, Move};
use chess_engine::{
    apply_move, choose_move, generate_legal_moves, is_square_attacked, GenerationResult,
};
use proptest::prelude::*;
use proptest::sample::Index;

/// Strategy for a random game: one move pick per ply
fn game_strategy() -> impl Strategy<Value = Vec<Index>> {
    prop::collection::vec(any::<Index>(), 1..=40)
}

/// Plays the picks from the starting position and returns every position
/// reached together with the move that was played in it.
fn random_game(picks: &[Index]) -> Vec<(GameState, Move)> {
    let mut state = GameState::new();
    let mut played = Vec::new();
    for pick in picks {
        let moves: Vec<Move> = match generate_legal_moves(&state) {
            GenerationResult::Moves(map) => map.moves().collect(),
            GenerationResult::GameOver { .. } => break,
        };
        let m = *pick.get(&moves);
        let next = apply_move(&state, m.from, m.to).unwrap();
        played.push((state, m));
        state = next;
    }
    played
}

proptest! {
    /// Property: no generated move leaves the mover's king attacked
    #[test]
    fn prop_generated_moves_keep_king_safe(picks in game_strategy()) {
        for (state, _) in random_game(&picks) {
            let us = state.side_to_move;
            let map = match generate_legal_moves(&state) {
                GenerationResult::Moves(map) => map,
                GenerationResult::GameOver { .. } => continue,
            };
            for m in map.moves() {
                let next = apply_move(&state, m.from, m.to).unwrap();
                let king = next.board.king_square(us).unwrap();
                prop_assert!(
                    !is_square_attacked(&next.board, king, us),
                    "{} leaves the king attacked in {}",
                    m,
                    state.to_fen()
                );
            }
        }
    }

    /// Property: every move flips the side to move and keeps both kings
    #[test]
    fn prop_apply_move_invariants(picks in game_strategy()) {
        for (state, m) in random_game(&picks) {
            let next = apply_move(&state, m.from, m.to).unwrap();
            prop_assert_eq!(next.side_to_move, state.side_to_move.opposite());
            prop_assert!(next.board.count() <= state.board.count());
            prop_assert!(next.board.king_square(state.side_to_move).is_some());
            prop_assert!(next.board.king_square(next.side_to_move).is_some());
            prop_assert_eq!(next.castling.raw() & !state.castling.raw(), 0);
        }
    }

    /// Property: FEN snapshots round-trip through random play
    #[test]
    fn prop_fen_roundtrip(picks in game_strategy()) {
        for (state, _) in random_game(&picks) {
            let restored = GameState::from_fen(&state.to_fen()).unwrap();
            prop_assert_eq!(restored, state);
        }
    }
}

/// Position reached after playing every pick that still has a legal move.
fn final_position(picks: &[Index]) -> GameState {
    match random_game(picks).last() {
        Some((state, m)) => apply_move(state, m.from, m.to).unwrap(),
        None => GameState::new(),
    }
}

proptest! {
    // Each case runs a full depth-2 search
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: the bot only ever picks a move from the legality map
    #[test]
    fn prop_chosen_move_is_legal(picks in game_strategy()) {
        let state = final_position(&picks);
        match generate_legal_moves(&state) {
            GenerationResult::Moves(map) => {
                let m = choose_move(&state);
                prop_assert!(m.is_some());
                let m = m.unwrap();
                prop_assert!(map.contains(m.from, m.to), "{} not legal in {}", m, state.to_fen());
            }
            GenerationResult::GameOver { .. } => prop_assert_eq!(choose_move(&state), None),
        }
    }
}
