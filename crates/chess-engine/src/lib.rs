//! Chess rules engine with a shallow minimax bot.
//!
//! This crate provides:
//! - [`generate_legal_moves`] - legal moves per origin square, or game over
//! - [`apply_move`] - successor state for a legal move
//! - [`static_score`] - material and piece-square evaluation
//! - [`choose_move`] and [`Searcher`] - fixed-depth minimax
//! - [`Game`] - session management with undo
//!
//! # Architecture
//!
//! Positions are [`GameState`](chess_core::GameState) values over a 64-square
//! mailbox board. Nothing here mutates its input: every move produces a new
//! state, and legality is checked by playing each candidate on a board copy
//! and asking whether the mover's king is attacked.
//!
//! # Example
//!
//! ```
//! use chess_core::{GameState, Square};
//! use chess_engine::{apply_move, choose_move, generate_legal_moves, GenerationResult};
//!
//! let state = GameState::new();
//! if let GenerationResult::Moves(map) = generate_legal_moves(&state) {
//!     println!("Legal moves from starting position: {}", map.len());
//! }
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let state = apply_move(&state, e2, e4).unwrap();
//! let reply = choose_move(&state).unwrap();
//! println!("Bot answers 1.e4 with {}", reply);
//! ```

mod apply;
mod error;
mod eval;
mod game;
pub mod movegen;
pub mod search;

pub use apply::apply_move;
pub use error::EngineError;
pub use eval::{material_value, static_score};
pub use game::{DrawReason, Game, GameResult, MoveOutcome};
pub use movegen::{
    classify_move, generate_legal_moves, is_in_check, is_square_attacked, GenerationResult,
    LegalityMap, MoveKind,
};
pub use search::{choose_move, minimax, SearchReport, Searcher, DEFAULT_DEPTH};
