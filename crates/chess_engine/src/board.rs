//! Board and occupancy map
//!
//! Provides the sparse board representation every movement rule queries:
//! - [`OccupancyMap`] maps coordinates to the piece standing there
//! - [`Board`] owns the map and the board size and mediates placement and queries
//! - [`SharedBoard`] wraps a board for hosts that query from several threads
//!
//! Queries never mutate the board. The only mutation is [`Board::add_piece`].

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{PlacementError, PlacementResult};
use crate::piece::Piece;
use crate::types::*;

/// What a square holds from the point of view of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareState {
    Empty,
    Friendly,
    Enemy,
}

/// Mapping from coordinate to occupying piece
///
/// Pieces are kept in insertion order so enumeration is deterministic; the
/// coordinate index gives constant-time lookup.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    pieces: Vec<Piece>,
    index: HashMap<Coordinate, usize>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<&Piece> {
        self.index.get(&at).map(|&i| &self.pieces[i])
    }

    /// Classify the square at `at` relative to `side`
    #[inline]
    pub fn square_state(&self, at: Coordinate, side: Side) -> SquareState {
        match self.get(at) {
            None => SquareState::Empty,
            Some(occupant) if occupant.side() == side => SquareState::Friendly,
            Some(_) => SquareState::Enemy,
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in the order they were inserted
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    fn insert(&mut self, piece: Piece) -> PlacementResult<()> {
        let at = piece.coordinate();
        if self.index.contains_key(&at) {
            return Err(PlacementError::OccupiedSquare { at });
        }
        self.index.insert(at, self.pieces.len());
        self.pieces.push(piece);
        Ok(())
    }
}

/// A square board of fixed size holding pieces keyed by coordinate
#[derive(Debug, Clone)]
pub struct Board {
    size: BoardSize,
    occupancy: OccupancyMap,
}

impl Board {
    /// Create an empty board with side length `size`
    pub fn new(size: BoardSize) -> Self {
        Board {
            size,
            occupancy: OccupancyMap::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Read-only view of the occupancy map
    #[inline]
    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    /// Place a piece on its coordinate
    ///
    /// Rejects coordinates off the board and squares that are already taken.
    /// A rejected placement leaves the board unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_engine::{Board, Coordinate, Piece, PieceKind, PlacementError, Side};
    ///
    /// let mut board = Board::new(8);
    /// let at = Coordinate::new(4, 4);
    /// board.add_piece(Piece::new(PieceKind::Rook, Side::White, at, 8)).unwrap();
    ///
    /// let clash = board.add_piece(Piece::new(PieceKind::Pawn, Side::Black, at, 8));
    /// assert_eq!(clash, Err(PlacementError::OccupiedSquare { at }));
    /// ```
    pub fn add_piece(&mut self, piece: Piece) -> PlacementResult<()> {
        let at = piece.coordinate();
        if !at.is_valid(self.size) {
            return Err(PlacementError::OutOfBounds {
                at,
                size: self.size,
            });
        }
        self.occupancy.insert(piece)
    }

    /// Get the piece at a coordinate, if any
    #[inline]
    pub fn get_piece(&self, at: Coordinate) -> Option<&Piece> {
        self.occupancy.get(at)
    }

    /// Pieces in placement order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.occupancy.iter()
    }

    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Both counts for `piece` against the current occupancy
    pub fn get_piece_tally(&self, piece: &Piece) -> MoveTally {
        piece.tally(&self.occupancy, self.size)
    }

    pub fn get_piece_possible_move_count(&self, piece: &Piece) -> usize {
        piece.moves_count(&self.occupancy, self.size)
    }

    pub fn get_piece_possible_captures_count(&self, piece: &Piece) -> usize {
        piece.captures_count(&self.occupancy, self.size)
    }
}

/// A board behind a single-writer, many-reader lock
///
/// Placement takes the write lock; queries take read locks and may run in
/// parallel with each other.
#[derive(Debug)]
pub struct SharedBoard {
    inner: RwLock<Board>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        SharedBoard {
            inner: RwLock::new(board),
        }
    }

    pub fn add_piece(&self, piece: Piece) -> PlacementResult<()> {
        self.inner.write().add_piece(piece)
    }

    /// Tally the piece standing on `at`, or `None` for an empty square
    pub fn tally_at(&self, at: Coordinate) -> Option<MoveTally> {
        let board = self.inner.read();
        board.get_piece(at).map(|piece| board.get_piece_tally(piece))
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
