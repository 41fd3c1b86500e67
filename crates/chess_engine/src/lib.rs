//! # chess_engine - Piece Move and Capture Counting
//!
//! Counts, for any arrangement of chess pieces on a square board of
//! configurable size, how many squares each piece could move to and how many
//! opposing pieces it could capture. Full legality is out of scope: there is
//! no check detection, castling, en passant, promotion or turn order.
//!
//! ## Module Organization
//!
//! - `types` - Coordinate, Side, PieceKind and MoveTally
//! - `constants` - Direction and offset tables
//! - `piece` - Piece values with precomputed leap targets
//! - `board` - Occupancy map, Board and SharedBoard
//! - `move_gen` - Leaping, pawn and sliding counting rules
//! - `error` - Placement and parse errors
//!
//! ## Usage
//!
//! ```rust
//! use chess_engine::{Board, Coordinate, Piece, PieceKind, Side};
//!
//! let mut board = Board::new(8);
//! board.add_piece(Piece::new(PieceKind::Rook, Side::White, Coordinate::new(4, 4), 8)).unwrap();
//! board.add_piece(Piece::new(PieceKind::Pawn, Side::Black, Coordinate::new(4, 6), 8)).unwrap();
//!
//! let rook = board.get_piece(Coordinate::new(4, 4)).unwrap();
//! assert_eq!(board.get_piece_possible_move_count(rook), 12);
//! assert_eq!(board.get_piece_possible_captures_count(rook), 1);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod piece;
pub mod types;

pub use board::{Board, OccupancyMap, SharedBoard, SquareState};
pub use error::{ParsePieceKindError, ParseSideError, PlacementError, PlacementResult};
pub use piece::Piece;
pub use types::{BoardSize, Coordinate, MoveTally, PieceKind, Side};
