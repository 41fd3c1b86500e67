//! Error types for board setup
//!
//! Each variant renders as the exact message written to the report when a
//! board description is rejected.

use chess_engine::{ParsePieceKindError, ParseSideError, PlacementError};
use thiserror::Error;

/// Reasons a board description is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("Invalid board size")]
    InvalidBoardSize,

    #[error("Invalid number of pieces")]
    InvalidNumberOfPieces,

    #[error("Invalid piece name")]
    InvalidPieceName,

    #[error("Invalid piece color")]
    InvalidPieceColor,

    /// Off the board or on an occupied square
    #[error("Invalid piece position")]
    InvalidPiecePosition,

    /// Not exactly one king per side
    #[error("Invalid given Kings")]
    InvalidGivenKings,

    /// Malformed line or non-integer where a number is expected
    #[error("Invalid input")]
    InvalidInput,
}

impl From<PlacementError> for SetupError {
    fn from(_: PlacementError) -> Self {
        SetupError::InvalidPiecePosition
    }
}

impl From<ParseSideError> for SetupError {
    fn from(_: ParseSideError) -> Self {
        SetupError::InvalidPieceColor
    }
}

impl From<ParsePieceKindError> for SetupError {
    fn from(_: ParsePieceKindError) -> Self {
        SetupError::InvalidPieceName
    }
}

/// Result type alias for setup operations
pub type SetupResult<T> = Result<T, SetupError>;
