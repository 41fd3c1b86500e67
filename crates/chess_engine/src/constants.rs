//! # Movement Vectors
//!
//! ## Overview
//!
//! Direction and offset tables shared by every movement rule. Vectors are
//! `(dx, dy)` pairs in board coordinates: `dx` moves along files, `dy` along
//! ranks, and positive `dy` points towards Black's side (the direction White
//! pawns advance).
//!
//! - **Sliding pieces** use the direction tables and repeat a step until blocked.
//!   The queen is the union of the bishop and rook tables.
//! - **Leaping pieces** use the offset tables exactly once per entry.
//!
//! Compass names follow the usual diagram orientation with White at the bottom:
//! north is `+y`, east is `+x`.

/// A `(dx, dy)` step
pub type Vector = (i32, i32);

pub const N: Vector = (0, 1);
pub const S: Vector = (0, -1);
pub const E: Vector = (1, 0);
pub const W: Vector = (-1, 0);
pub const NE: Vector = (1, 1);
pub const NW: Vector = (-1, 1);
pub const SE: Vector = (1, -1);
pub const SW: Vector = (-1, -1);

pub const BISHOP_DIRS: [Vector; 4] = [NW, NE, SW, SE];
pub const ROOK_DIRS: [Vector; 4] = [W, E, N, S];
pub const QUEEN_DIRS: [Vector; 8] = [NW, NE, SW, SE, W, E, N, S];

pub const KNIGHT_OFFSETS: [Vector; 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];
pub const KING_OFFSETS: [Vector; 8] = [NW, N, NE, W, E, SW, S, SE];

/// Files a pawn captures towards, relative to its forward direction
pub const PAWN_CAPTURE_FILES: [i32; 2] = [-1, 1];
