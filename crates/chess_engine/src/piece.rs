//! Piece representation
//!
//! A [`Piece`] is a kind, a side and a coordinate. Leaping pieces (knights and
//! kings) also carry their on-board leap targets, computed once when the piece
//! is constructed for a given board size.

use std::borrow::Cow;

use crate::board::OccupancyMap;
use crate::constants::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::move_gen::{self, leaping};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    at: Coordinate,
    board_size: BoardSize,
    leaps: Vec<Coordinate>,
}

impl Piece {
    /// Create a piece standing on `at` for a board of `board_size`
    ///
    /// The board size is only used to precompute leap targets; placing the
    /// piece is validated separately by [`Board::add_piece`](crate::board::Board::add_piece).
    pub fn new(kind: PieceKind, side: Side, at: Coordinate, board_size: BoardSize) -> Self {
        Piece {
            kind,
            side,
            at,
            board_size,
            leaps: compute_leaps(kind, at, board_size),
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.at
    }

    /// On-board leap targets for a board of `board_size`
    ///
    /// Returns the precomputed list when the size matches the one given at
    /// construction, otherwise recomputes for this call only. Empty for
    /// pieces that do not leap.
    pub fn leap_targets(&self, board_size: BoardSize) -> Cow<'_, [Coordinate]> {
        if board_size == self.board_size {
            Cow::Borrowed(&self.leaps)
        } else {
            Cow::Owned(compute_leaps(self.kind, self.at, board_size))
        }
    }

    /// Count moves and captures against `occupancy` in one traversal
    pub fn tally(&self, occupancy: &OccupancyMap, board_size: BoardSize) -> MoveTally {
        move_gen::tally(self, occupancy, board_size)
    }

    pub fn moves_count(&self, occupancy: &OccupancyMap, board_size: BoardSize) -> usize {
        self.tally(occupancy, board_size).moves
    }

    pub fn captures_count(&self, occupancy: &OccupancyMap, board_size: BoardSize) -> usize {
        self.tally(occupancy, board_size).captures
    }
}

fn compute_leaps(kind: PieceKind, at: Coordinate, board_size: BoardSize) -> Vec<Coordinate> {
    match kind {
        PieceKind::Knight => leaping::leap_targets(at, &KNIGHT_OFFSETS, board_size),
        PieceKind::King => leaping::leap_targets(at, &KING_OFFSETS, board_size),
        _ => Vec::new(),
    }
}
