//! Leaping piece move counting
//!
//! Knights and kings jump to a fixed offset pattern around their square,
//! ignoring anything in between.
//!
//! ## Leaping Rules
//!
//! - Knights use the eight (±1, ±2) / (±2, ±1) offsets
//! - Kings use the eight neighbouring squares
//! - Off-board targets are dropped once, when the piece is constructed
//! - A target is a move when empty or held by the opponent
//! - A target is a capture when held by the opponent

use crate::board::{OccupancyMap, SquareState};
use crate::constants::Vector;
use crate::types::*;

/// All on-board squares reached by applying `offsets` to `from`
pub fn leap_targets(from: Coordinate, offsets: &[Vector], board_size: BoardSize) -> Vec<Coordinate> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| from.step_on_board(dx, dy, board_size))
        .collect()
}

/// Classify precomputed leap targets for a piece of `side`
pub fn tally_leaps(targets: &[Coordinate], side: Side, occupancy: &OccupancyMap) -> MoveTally {
    let mut tally = MoveTally::EMPTY;

    for &target in targets {
        match occupancy.square_state(target, side) {
            SquareState::Empty => tally.record(false),
            SquareState::Enemy => tally.record(true),
            SquareState::Friendly => {}
        }
    }

    tally
}
