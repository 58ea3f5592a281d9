//! Scenario tests over short move sequences.

use chess_core::{Color, GameState, Piece, PieceKind, Square};
use chess_engine::{
    apply_move, choose_move, generate_legal_moves, minimax, static_score, Game, GameResult,
    GenerationResult, MoveOutcome, Searcher,
};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play_line(mut state: GameState, line: &[(&str, &str)]) -> GameState {
    for &(from, to) in line {
        let result = generate_legal_moves(&state);
        assert!(
            result.contains(sq(from), sq(to)),
            "{}-{} is not legal in {}",
            from,
            to,
            state.to_fen()
        );
        state = apply_move(&state, sq(from), sq(to)).unwrap();
    }
    state
}

#[test]
fn en_passant_window() {
    let state = play_line(
        GameState::new(),
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    assert_eq!(state.en_passant, Some(sq("d6")));

    let state = play_line(state, &[("e5", "d6")]);
    assert_eq!(state.board.get(sq("d5")), None);
    assert_eq!(
        state.board.get(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(state.en_passant, None);
}

#[test]
fn en_passant_expires_after_one_ply() {
    let state = play_line(
        GameState::new(),
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5"), ("h2", "h3"), ("h7", "h6")],
    );
    assert!(!generate_legal_moves(&state).contains(sq("e5"), sq("d6")));
}

#[test]
fn kingside_castling() {
    let state = play_line(
        GameState::new(),
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
    );
    let result = generate_legal_moves(&state);
    assert!(result.contains(Square::E1, Square::G1));

    let state = apply_move(&state, Square::E1, Square::G1).unwrap();
    assert_eq!(
        state.board.get(Square::G1),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        state.board.get(Square::F1),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(state.board.get(Square::H1), None);
    assert!(!state.castling.can_castle_kingside(Color::White));
}

#[test]
fn castling_blocked_by_attacked_transit() {
    // The black bishop on c4 covers f1
    let state =
        GameState::from_fen("rnbqk1nr/pppp1ppp/8/4p3/2b1P3/5N2/PPPP2PP/RNBQK2R w KQkq - 0 5")
            .unwrap();
    let result = generate_legal_moves(&state);
    assert!(!result.contains(Square::E1, Square::G1));
}

#[test]
fn fools_mate() {
    let state = play_line(
        GameState::new(),
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(
        generate_legal_moves(&state),
        GenerationResult::GameOver { is_checkmate: true }
    );
    assert_eq!(choose_move(&state), None);
}

#[test]
fn constructed_stalemate() {
    let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
    assert_eq!(
        generate_legal_moves(&state),
        GenerationResult::GameOver { is_checkmate: false }
    );
}

#[test]
fn bot_finds_mate_in_one_for_black() {
    let state = play_line(
        GameState::new(),
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")],
    );
    let m = choose_move(&state).unwrap();
    assert_eq!((m.from, m.to), (Square::D8, sq("h4")));
}

#[test]
fn bot_takes_hanging_queen() {
    let state = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let report = Searcher::new(1).search(&state).unwrap();
    assert_eq!((report.best.from, report.best.to), (sq("e4"), sq("d5")));
}

#[test]
fn bot_moves_are_legal() {
    let positions = [
        GameState::new(),
        GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap(),
        GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap(),
    ];
    for state in &positions {
        let m = choose_move(state).unwrap();
        assert!(generate_legal_moves(state).contains(m.from, m.to));
        assert_eq!(choose_move(state), Some(m));
    }
}

#[test]
fn minimax_depth_zero_matches_evaluator() {
    let state = play_line(GameState::new(), &[("e2", "e4"), ("d7", "d5")]);
    assert_eq!(minimax(&state, 0, true), static_score(&state));
}

#[test]
fn session_plays_to_checkmate() {
    let mut game = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        assert_eq!(game.try_move(sq(from), sq(to)), MoveOutcome::Played);
    }
    let m = game.play_bot(&Searcher::default()).unwrap();
    assert_eq!(m.to, sq("h4"));
    assert_eq!(game.result(), Some(GameResult::BlackWins));
    assert_eq!(game.try_move(sq("a2"), sq("a3")), MoveOutcome::Ignored);

    assert!(game.undo());
    assert_eq!(game.result(), None);
    assert_eq!(game.ply_count(), 3);
}

#[test]
fn snapshot_survives_fen() {
    let state = play_line(
        GameState::new(),
        &[("e2", "e4"), ("c7", "c5"), ("g1", "f3"), ("d7", "d6")],
    );
    let text = state.to_fen();
    assert_eq!(
        text,
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3"
    );
    assert_eq!(GameState::from_fen(&text).unwrap(), state);
}
