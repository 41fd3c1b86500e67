//! Pawn move counting
//!
//! Handles pawn-specific counting:
//! - Single forward step
//! - Diagonal captures
//!
//! ## Pawn Counting Rules
//!
//! - **Forward step**: White advances towards higher ranks, Black towards lower
//! - The step counts as a move when the square ahead is on the board and is
//!   empty or held by the opponent. An opposing piece straight ahead does not
//!   block the count.
//! - **Captures**: each forward diagonal that holds an opponent piece
//! - No double step, en passant or promotion

use crate::board::{OccupancyMap, SquareState};
use crate::constants::PAWN_CAPTURE_FILES;
use crate::types::*;

/// Count the forward move and diagonal captures of a pawn on `from`
///
/// Captures are reported separately from the forward move, so a pawn can have
/// zero moves and two captures.
pub fn tally_pawn(
    from: Coordinate,
    side: Side,
    occupancy: &OccupancyMap,
    board_size: BoardSize,
) -> MoveTally {
    let forward = side.forward();
    let mut tally = MoveTally::EMPTY;

    if let Some(ahead) = from.step_on_board(0, forward, board_size) {
        if occupancy.square_state(ahead, side) != SquareState::Friendly {
            tally.moves = 1;
        }
    }

    tally.captures = PAWN_CAPTURE_FILES
        .into_iter()
        .filter_map(|df| from.step_on_board(df, forward, board_size))
        .filter(|&diagonal| occupancy.square_state(diagonal, side) == SquareState::Enemy)
        .count();

    tally
}
