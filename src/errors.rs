//! Crate-wide error type.
//!
//! Only invariant violations and malformed setup input are errors. Ordinary
//! illegal play (clicking a square that is not a legal destination, toggling
//! quantum mode without credits, acting after the game ended) is answered by
//! the session layer with an advisory outcome instead.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move or split was applied from a square holding no materialized piece.
    #[error("no piece on from-square {square}")]
    EmptyOrigin { square: Square },

    /// The side whose legality is being checked has no king on the board.
    #[error("no {color:?} king on the board")]
    MissingKing { color: Color },

    /// A superposition was requested with both halves on one square.
    #[error("superposition needs two distinct squares, got {square} twice")]
    DegenerateSuperposition { square: Square },

    /// A collapse was requested on a square no superposition covers.
    #[error("no superposition covers square {square}")]
    UnknownSuperposition { square: Square },

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
