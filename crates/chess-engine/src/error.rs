//! Engine error type.

use chess_core::Square;
use thiserror::Error;

/// Errors returned by the engine's state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move was requested from a square that holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),
}
