//! Error types for the move counting engine
//!
//! Provides typed errors for board placement and for parsing the literal
//! names of sides and piece kinds. None of these abort the process; callers
//! decide how to present them.

use thiserror::Error;

use crate::types::{BoardSize, Coordinate};

/// Errors raised when placing a piece on a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Coordinate is not on the board
    #[error("square {at} is outside a board of size {size}")]
    OutOfBounds { at: Coordinate, size: BoardSize },

    /// Another piece already stands on the square
    #[error("square {at} is already occupied")]
    OccupiedSquare { at: Coordinate },
}

/// Unrecognised side literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSideError {
    #[error("unknown side {literal:?} (expected \"White\" or \"Black\")")]
    UnknownSide { literal: String },
}

/// Unrecognised piece name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceKindError {
    #[error("unknown piece kind {literal:?}")]
    UnknownPieceKind { literal: String },
}

/// Result type alias for placement operations
pub type PlacementResult<T> = Result<T, PlacementError>;
