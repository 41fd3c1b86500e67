//! Move and capture counting
//!
//! Dispatches a piece to the movement rule for its kind. The rules themselves
//! are free functions over direction or offset tables so no walk is duplicated:
//!
//! - `leaping` - knights and kings, fixed offset patterns
//! - `pawn` - single forward step plus two forward diagonals
//! - `sliding` - bishops, rooks and queens, rays stopped by the first occupant

pub mod leaping;
pub mod pawn;
pub mod sliding;

#[cfg(test)]
mod tests;

use crate::board::OccupancyMap;
use crate::constants::*;
use crate::piece::Piece;
use crate::types::*;

/// Count moves and captures for `piece` against `occupancy`
pub fn tally(piece: &Piece, occupancy: &OccupancyMap, board_size: BoardSize) -> MoveTally {
    let at = piece.coordinate();
    let side = piece.side();

    match piece.kind() {
        PieceKind::Knight | PieceKind::King => {
            leaping::tally_leaps(&piece.leap_targets(board_size), side, occupancy)
        }
        PieceKind::Pawn => pawn::tally_pawn(at, side, occupancy, board_size),
        PieceKind::Bishop => sliding::tally_rays(at, side, &BISHOP_DIRS, occupancy, board_size),
        PieceKind::Rook => sliding::tally_rays(at, side, &ROOK_DIRS, occupancy, board_size),
        PieceKind::Queen => sliding::tally_rays(at, side, &QUEEN_DIRS, occupancy, board_size),
    }
}
