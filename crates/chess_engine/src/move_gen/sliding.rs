//! Sliding piece move counting
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector independently:
//! 1. Step one square further along the direction
//! 2. Stop when the square is off the board
//! 3. An empty square is a move; keep going
//! 4. An opponent piece is a move and a capture; stop
//! 5. An own piece contributes nothing; stop
//!
//! Both counts are accumulated in the same walk.
//!
//! ## Performance
//!
//! - **Time complexity**: O(d · n) for `d` directions on a board of size `n`
//! - **Space complexity**: O(1)
//! - **Typical moves from the centre of an empty 8×8 board**: 14 for rooks,
//!   13 for bishops, 27 for queens

use crate::board::{OccupancyMap, SquareState};
use crate::constants::Vector;
use crate::types::*;

/// Cast one ray from `from` along `dir`
///
/// The ray never includes `from` itself and always terminates, since every
/// step moves the coordinate strictly towards the board edge.
pub fn tally_ray(
    from: Coordinate,
    side: Side,
    dir: Vector,
    occupancy: &OccupancyMap,
    board_size: BoardSize,
) -> MoveTally {
    let mut tally = MoveTally::EMPTY;
    let (dx, dy) = dir;
    let mut current = from.step_on_board(dx, dy, board_size);

    while let Some(square) = current {
        match occupancy.square_state(square, side) {
            // Empty square: valid move, continue in this direction
            SquareState::Empty => tally.record(false),
            SquareState::Enemy => {
                tally.record(true);
                break;
            }
            SquareState::Friendly => break,
        }
        current = square.step_on_board(dx, dy, board_size);
    }

    tally
}

/// Cast a ray along each direction and sum the counts
///
/// # Arguments
///
/// * `from` - Square the sliding piece stands on
/// * `side` - Side of the moving piece
/// * `dirs` - Direction vectors, e.g. `BISHOP_DIRS`
/// * `occupancy` - Current board occupancy
/// * `board_size` - Side length of the board
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::OccupancyMap;
/// use chess_engine::constants::ROOK_DIRS;
/// use chess_engine::move_gen::sliding::tally_rays;
/// use chess_engine::{Coordinate, Side};
///
/// let tally = tally_rays(Coordinate::new(1, 1), Side::White, &ROOK_DIRS, &OccupancyMap::new(), 8);
/// assert_eq!(tally.moves, 14);
/// ```
pub fn tally_rays(
    from: Coordinate,
    side: Side,
    dirs: &[Vector],
    occupancy: &OccupancyMap,
    board_size: BoardSize,
) -> MoveTally {
    let mut tally = MoveTally::EMPTY;
    for &dir in dirs {
        tally += tally_ray(from, side, dir, occupancy, board_size);
    }
    tally
}
