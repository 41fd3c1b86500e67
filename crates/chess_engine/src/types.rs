//! # Core Types - Coordinates, Sides and Piece Kinds
//!
//! ## Overview
//!
//! The engine works on a sparse, square board of configurable size. Squares are
//! addressed by a 1-indexed `(x, y)` [`Coordinate`] where `x` is the file and `y`
//! the rank, so a board of size `n` spans `[1, n] × [1, n]`.
//!
//! Pieces are described by a closed [`PieceKind`] and a [`Side`]. Both are parsed
//! from the exact literals used in board descriptions (`"Knight"`, `"White"`, ...),
//! and parsing is case-sensitive.
//!
//! ## Indexing
//!
//! Board descriptions address squares starting at 1 and the engine uses the
//! same convention internally. `(1, 1)` is White's bottom-left corner.
//!
//! ## MoveTally
//!
//! Every query walks the candidate squares of a piece once and produces a
//! [`MoveTally`] with both counts. The per-count queries on the board simply pick
//! one field.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParsePieceKindError, ParseSideError};

/// Side length of a square board
pub type BoardSize = i32;

/// An immutable `(x, y)` square address, 1-indexed
///
/// Coordinates outside the board are representable; use
/// [`Coordinate::is_valid`] before treating one as a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on a board of `board_size`
    ///
    /// Both components must be within `1..=board_size`.
    #[inline]
    pub fn is_valid(self, board_size: BoardSize) -> bool {
        (1..=board_size).contains(&self.x) && (1..=board_size).contains(&self.y)
    }

    /// The coordinate shifted by `(dx, dy)`, possibly off the board
    ///
    /// `None` when either component leaves the `i32` range.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// [`offset`](Self::offset) restricted to squares of a board of `board_size`
    #[inline]
    pub fn step_on_board(self, dx: i32, dy: i32, board_size: BoardSize) -> Option<Self> {
        self.offset(dx, dy).filter(|to| to.is_valid(board_size))
    }
}

/// Renders the canonical `"x y"` key form
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Parse a side from its literal name
    ///
    /// Only `"White"` and `"Black"` are accepted.
    pub fn parse(text: &str) -> Result<Self, ParseSideError> {
        match text {
            "White" => Ok(Side::White),
            "Black" => Ok(Side::Black),
            other => Err(ParseSideError::UnknownSide {
                literal: other.to_string(),
            }),
        }
    }

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank direction pawns of this side advance in
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::parse(s)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::White => "White",
            Side::Black => "Black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Knight,
    King,
    Pawn,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Knight,
        PieceKind::King,
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Parse a piece kind from its literal name, e.g. `"Queen"`
    pub fn parse(text: &str) -> Result<Self, ParsePieceKindError> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == text)
            .ok_or_else(|| ParsePieceKindError::UnknownPieceKind {
                literal: text.to_string(),
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Knight => "Knight",
            PieceKind::King => "King",
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
        }
    }
}

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::parse(s)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Move and capture counts gathered in a single traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveTally {
    pub moves: usize,
    pub captures: usize,
}

impl MoveTally {
    pub const EMPTY: MoveTally = MoveTally {
        moves: 0,
        captures: 0,
    };

    /// Record a reachable square, counting it as a capture too when `capture` is set
    #[inline]
    pub fn record(&mut self, capture: bool) {
        self.moves += 1;
        if capture {
            self.captures += 1;
        }
    }
}

impl std::ops::AddAssign for MoveTally {
    fn add_assign(&mut self, rhs: Self) {
        self.moves += rhs.moves;
        self.captures += rhs.captures;
    }
}
