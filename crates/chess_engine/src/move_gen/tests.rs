//! Test suite for move and capture counting
//!
//! Exercises every counting rule through the public `Board` queries.
//!
//! # Test Organization
//!
//! - `test_coordinate_*` - Board bounds predicate
//! - `test_knight_*` / `test_king_*` - Leaping offsets and classification
//! - `test_pawn_*` - Forward step and diagonal captures per side
//! - `test_bishop_*` / `test_rook_*` / `test_queen_*` - Ray casting and blocking
//! - `test_board_*` - Placement, lookup and query idempotence

use crate::error::PlacementError;
use crate::types::*;
use crate::{Board, Piece, SharedBoard};

/// Build a board from `(kind, side, (x, y))` tuples
///
/// Panics if a placement is rejected, so tests only pass legal setups.
fn create_test_board(size: BoardSize, pieces: &[(PieceKind, Side, (i32, i32))]) -> Board {
    let mut board = Board::new(size);
    for &(kind, side, (x, y)) in pieces {
        board
            .add_piece(Piece::new(kind, side, Coordinate::new(x, y), size))
            .expect("test setup placement should succeed");
    }
    board
}

fn tally_at(board: &Board, x: i32, y: i32) -> MoveTally {
    let piece = board
        .get_piece(Coordinate::new(x, y))
        .expect("test square should hold a piece");
    board.get_piece_tally(piece)
}

// ============================================================================
// Coordinate Tests
// ============================================================================

#[test]
fn test_coordinate_validity_matches_inclusive_bounds() {
    //! `is_valid` accepts exactly the squares in [1, n] x [1, n]
    for n in 1..=6 {
        for x in -1..=n + 2 {
            for y in -1..=n + 2 {
                let expected = x >= 1 && x <= n && y >= 1 && y <= n;
                assert_eq!(
                    Coordinate::new(x, y).is_valid(n),
                    expected,
                    "({x}, {y}) on size {n}"
                );
            }
        }
    }
}

#[test]
fn test_coordinate_display_is_canonical_key() {
    assert_eq!(Coordinate::new(3, 11).to_string(), "3 11");
}

#[test]
fn test_coordinate_offset_stops_at_integer_limits() {
    //! Shifting past the `i32` range yields no coordinate instead of wrapping
    assert_eq!(Coordinate::new(i32::MAX, 1).offset(1, 0), None);
    assert_eq!(Coordinate::new(1, i32::MIN).offset(0, -1), None);
    assert_eq!(
        Coordinate::new(i32::MAX, 1).offset(-1, 1),
        Some(Coordinate::new(i32::MAX - 1, 2))
    );
    assert_eq!(Coordinate::new(i32::MAX, 1).step_on_board(-1, 0, 8), None);
}

// ============================================================================
// Knight Tests
// ============================================================================

#[test]
fn test_knight_center_empty_board() {
    //! A knight in the middle of an empty board reaches all eight L-squares
    let board = create_test_board(8, &[(PieceKind::Knight, Side::White, (4, 4))]);

    assert_eq!(tally_at(&board, 4, 4), MoveTally { moves: 8, captures: 0 });
}

#[test]
fn test_knight_corner_empty_board() {
    //! Only (3, 2) and (2, 3) remain on the board from the corner
    let board = create_test_board(8, &[(PieceKind::Knight, Side::White, (1, 1))]);
    let knight = board.get_piece(Coordinate::new(1, 1)).unwrap();

    assert_eq!(board.get_piece_possible_move_count(knight), 2);
    assert_eq!(
        &*knight.leap_targets(8),
        &[Coordinate::new(3, 2), Coordinate::new(2, 3)]
    );
}

#[test]
fn test_knight_jumps_over_blockers() {
    //! Surrounding pieces do not stop a knight; only target squares matter
    let board = create_test_board(
        8,
        &[
            (PieceKind::Knight, Side::White, (4, 4)),
            (PieceKind::Pawn, Side::White, (4, 5)),
            (PieceKind::Pawn, Side::White, (5, 4)),
            (PieceKind::Pawn, Side::White, (3, 4)),
            (PieceKind::Pawn, Side::White, (4, 3)),
            (PieceKind::Rook, Side::Black, (5, 6)),
            (PieceKind::Bishop, Side::White, (6, 5)),
        ],
    );

    let tally = tally_at(&board, 4, 4);
    assert_eq!(tally.moves, 7, "own bishop on (6, 5) removes one target");
    assert_eq!(tally.captures, 1, "black rook on (5, 6) is capturable");
}

// ============================================================================
// King Tests
// ============================================================================

#[test]
fn test_king_center_empty_board() {
    let board = create_test_board(8, &[(PieceKind::King, Side::Black, (4, 4))]);

    assert_eq!(tally_at(&board, 4, 4), MoveTally { moves: 8, captures: 0 });
}

#[test]
fn test_king_edge_and_neighbours() {
    //! King on the bottom edge with one friend and two enemies next to it
    let board = create_test_board(
        5,
        &[
            (PieceKind::King, Side::White, (3, 1)),
            (PieceKind::Pawn, Side::White, (2, 1)),
            (PieceKind::Knight, Side::Black, (3, 2)),
            (PieceKind::Queen, Side::Black, (4, 2)),
        ],
    );

    let tally = tally_at(&board, 3, 1);
    assert_eq!(tally.moves, 4, "five on-board neighbours minus the own pawn");
    assert_eq!(tally.captures, 2);
}

#[test]
fn test_leap_targets_recomputed_for_other_board_size() {
    //! Targets cached for size 8 are not reused for a 3x3 query
    let knight = Piece::new(PieceKind::Knight, Side::White, Coordinate::new(2, 2), 8);

    assert_eq!(knight.leap_targets(8).len(), 4);
    assert!(knight.leap_targets(3).is_empty());
}

// ============================================================================
// Pawn Tests
// ============================================================================

#[test]
fn test_pawn_white_advances_up() {
    let board = create_test_board(8, &[(PieceKind::Pawn, Side::White, (2, 2))]);

    assert_eq!(tally_at(&board, 2, 2), MoveTally { moves: 1, captures: 0 });
}

#[test]
fn test_pawn_last_rank_has_no_move() {
    //! White on the top rank and Black on the bottom rank cannot step off the board
    let board = create_test_board(
        4,
        &[
            (PieceKind::Pawn, Side::White, (1, 4)),
            (PieceKind::Pawn, Side::Black, (4, 1)),
        ],
    );

    assert_eq!(tally_at(&board, 1, 4), MoveTally::EMPTY);
    assert_eq!(tally_at(&board, 4, 1), MoveTally::EMPTY);
}

#[test]
fn test_pawn_blocked_by_own_piece() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::Pawn, Side::Black, (5, 5)),
            (PieceKind::Rook, Side::Black, (5, 4)),
        ],
    );

    assert_eq!(tally_at(&board, 5, 5).moves, 0);
}

#[test]
fn test_pawn_forward_onto_enemy_counts_as_move() {
    //! An opposing piece straight ahead still counts as a forward move
    let board = create_test_board(
        8,
        &[
            (PieceKind::Pawn, Side::White, (3, 3)),
            (PieceKind::Pawn, Side::Black, (3, 4)),
        ],
    );

    assert_eq!(tally_at(&board, 3, 3), MoveTally { moves: 1, captures: 0 });
}

#[test]
fn test_pawn_captures_both_diagonals() {
    //! Black captures downward; enemies on the rear diagonals do not count
    let board = create_test_board(
        8,
        &[
            (PieceKind::Pawn, Side::Black, (4, 5)),
            (PieceKind::Knight, Side::White, (3, 4)),
            (PieceKind::Bishop, Side::White, (5, 4)),
            (PieceKind::Rook, Side::White, (3, 6)),
            (PieceKind::Rook, Side::White, (5, 6)),
        ],
    );

    assert_eq!(tally_at(&board, 4, 5), MoveTally { moves: 1, captures: 2 });
}

#[test]
fn test_pawn_edge_file_single_diagonal() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::Pawn, Side::White, (1, 3)),
            (PieceKind::Pawn, Side::Black, (2, 4)),
            (PieceKind::Pawn, Side::Black, (1, 4)),
        ],
    );

    assert_eq!(tally_at(&board, 1, 3), MoveTally { moves: 1, captures: 1 });
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_rook_center_empty_board() {
    //! Each ray runs to the edge: (x-1) + (n-x) + (y-1) + (n-y) = 2(n-1)
    let board = create_test_board(8, &[(PieceKind::Rook, Side::White, (4, 4))]);
    let (n, x, y) = (8, 4, 4);
    let expected = (x - 1) + (n - x) + (y - 1) + (n - y);

    assert_eq!(expected, 14);
    assert_eq!(tally_at(&board, 4, 4), MoveTally { moves: 14, captures: 0 });
}

#[test]
fn test_rook_ray_stops_at_enemy() {
    //! The upward ray includes the capture on (4, 6) and nothing beyond it
    let board = create_test_board(
        8,
        &[
            (PieceKind::Rook, Side::White, (4, 4)),
            (PieceKind::Pawn, Side::Black, (4, 6)),
        ],
    );

    // 3 left + 4 right + 3 down + (4, 5) and (4, 6) up
    assert_eq!(tally_at(&board, 4, 4), MoveTally { moves: 12, captures: 1 });
}

#[test]
fn test_rook_ray_stops_before_own_piece() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::Rook, Side::Black, (1, 1)),
            (PieceKind::King, Side::Black, (1, 3)),
            (PieceKind::Pawn, Side::White, (5, 1)),
        ],
    );

    // (1, 2) up; (2, 1), (3, 1), (4, 1) and the capture on (5, 1) right
    assert_eq!(tally_at(&board, 1, 1), MoveTally { moves: 5, captures: 1 });
}

#[test]
fn test_bishop_blocked_by_own_pieces() {
    //! Four own pieces on the adjacent diagonals leave nothing to do
    let board = create_test_board(
        8,
        &[
            (PieceKind::Bishop, Side::White, (4, 4)),
            (PieceKind::Pawn, Side::White, (3, 3)),
            (PieceKind::Pawn, Side::White, (5, 3)),
            (PieceKind::Pawn, Side::White, (3, 5)),
            (PieceKind::Pawn, Side::White, (5, 5)),
        ],
    );

    assert_eq!(tally_at(&board, 4, 4), MoveTally::EMPTY);
}

#[test]
fn test_bishop_center_empty_board() {
    let board = create_test_board(8, &[(PieceKind::Bishop, Side::White, (4, 4))]);

    // 3 towards (1, 1), 4 towards (8, 8), 3 towards (1, 7), 3 towards (7, 1)
    assert_eq!(tally_at(&board, 4, 4).moves, 13);
}

#[test]
fn test_bishop_ignores_orthogonal_blockers() {
    let board = create_test_board(
        3,
        &[
            (PieceKind::Bishop, Side::Black, (2, 2)),
            (PieceKind::Rook, Side::White, (2, 3)),
            (PieceKind::Rook, Side::White, (1, 2)),
            (PieceKind::Knight, Side::White, (3, 3)),
        ],
    );

    assert_eq!(tally_at(&board, 2, 2), MoveTally { moves: 4, captures: 1 });
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let pieces_at = |kind| {
        create_test_board(
            8,
            &[
                (kind, Side::White, (3, 5)),
                (PieceKind::Knight, Side::Black, (3, 8)),
                (PieceKind::Pawn, Side::Black, (6, 2)),
                (PieceKind::King, Side::White, (1, 5)),
                (PieceKind::King, Side::Black, (4, 6)),
            ],
        )
    };

    let rook = tally_at(&pieces_at(PieceKind::Rook), 3, 5);
    let bishop = tally_at(&pieces_at(PieceKind::Bishop), 3, 5);
    let queen = tally_at(&pieces_at(PieceKind::Queen), 3, 5);

    assert_eq!(queen.moves, rook.moves + bishop.moves);
    assert_eq!(queen.captures, rook.captures + bishop.captures);
    assert_eq!(queen.captures, 3);
}

#[test]
fn test_queen_on_one_square_board() {
    let board = create_test_board(1, &[(PieceKind::Queen, Side::White, (1, 1))]);

    assert_eq!(tally_at(&board, 1, 1), MoveTally::EMPTY);
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_board_rejects_occupied_square() {
    //! A second piece on a taken square is refused and the board is unchanged
    let mut board = create_test_board(8, &[(PieceKind::Rook, Side::White, (2, 2))]);
    let at = Coordinate::new(2, 2);

    let result = board.add_piece(Piece::new(PieceKind::Queen, Side::Black, at, 8));

    assert_eq!(result, Err(PlacementError::OccupiedSquare { at }));
    assert_eq!(board.len(), 1);
    let occupant = board.get_piece(at).unwrap();
    assert_eq!(occupant.kind(), PieceKind::Rook);
    assert_eq!(occupant.side(), Side::White);
}

#[test]
fn test_board_rejects_out_of_bounds() {
    let mut board = Board::new(4);

    for (x, y) in [(0, 1), (1, 0), (5, 4), (4, 5), (-2, -2)] {
        let at = Coordinate::new(x, y);
        assert_eq!(
            board.add_piece(Piece::new(PieceKind::King, Side::White, at, 4)),
            Err(PlacementError::OutOfBounds { at, size: 4 })
        );
    }
    assert!(board.is_empty());
}

const EXTREME_SQUARES: [(i32, i32); 6] = [
    (i32::MAX, 1),
    (1, i32::MAX),
    (i32::MIN, 1),
    (1, i32::MIN),
    (i32::MAX, i32::MAX),
    (i32::MIN, i32::MIN),
];

#[test]
fn test_board_rejects_integer_limit_squares() {
    //! Every kind can be built at the `i32` limits and is rejected as off the board
    let mut board = Board::new(8);

    for kind in PieceKind::ALL {
        for side in [Side::White, Side::Black] {
            for (x, y) in EXTREME_SQUARES {
                let at = Coordinate::new(x, y);
                assert_eq!(
                    board.add_piece(Piece::new(kind, side, at, 8)),
                    Err(PlacementError::OutOfBounds { at, size: 8 }),
                    "{side} {kind} at {at} should be out of bounds"
                );
            }
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_unplaced_piece_at_integer_limits_counts_nothing() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::King, Side::White, (8, 1)),
            (PieceKind::King, Side::Black, (1, 8)),
        ],
    );

    for kind in PieceKind::ALL {
        for (x, y) in EXTREME_SQUARES {
            let piece = Piece::new(kind, Side::White, Coordinate::new(x, y), 8);
            assert_eq!(
                board.get_piece_tally(&piece),
                MoveTally::EMPTY,
                "{kind} at ({x}, {y}) has no squares on the board"
            );
        }
    }
}

#[test]
fn test_board_get_piece_returns_placed_piece() {
    let mut board = Board::new(8);
    let piece = Piece::new(PieceKind::Bishop, Side::Black, Coordinate::new(6, 1), 8);

    board.add_piece(piece.clone()).unwrap();

    assert_eq!(board.get_piece(Coordinate::new(6, 1)), Some(&piece));
    assert_eq!(board.get_piece(Coordinate::new(1, 6)), None);
}

#[test]
fn test_board_pieces_keep_insertion_order() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::Queen, Side::White, (8, 8)),
            (PieceKind::Pawn, Side::Black, (1, 1)),
            (PieceKind::King, Side::White, (4, 5)),
        ],
    );

    let order: Vec<_> = board.pieces().map(|p| p.coordinate()).collect();
    assert_eq!(
        order,
        vec![Coordinate::new(8, 8), Coordinate::new(1, 1), Coordinate::new(4, 5)]
    );
}

#[test]
fn test_board_queries_are_idempotent() {
    let board = create_test_board(
        8,
        &[
            (PieceKind::Queen, Side::White, (4, 4)),
            (PieceKind::Rook, Side::Black, (4, 7)),
            (PieceKind::Knight, Side::Black, (6, 6)),
        ],
    );
    let queen = board.get_piece(Coordinate::new(4, 4)).unwrap();

    let first = (
        board.get_piece_possible_move_count(queen),
        board.get_piece_possible_captures_count(queen),
    );
    let second = (
        board.get_piece_possible_move_count(queen),
        board.get_piece_possible_captures_count(queen),
    );

    assert_eq!(first, second);
    assert_eq!(board.len(), 3);
}

#[test]
fn test_board_queries_unplaced_piece() {
    //! Queries accept a freestanding piece and read the board around it
    let board = create_test_board(8, &[(PieceKind::Pawn, Side::White, (2, 3))]);
    let knight = Piece::new(PieceKind::Knight, Side::Black, Coordinate::new(1, 1), 8);

    assert_eq!(board.get_piece_tally(&knight), MoveTally { moves: 2, captures: 1 });
}

#[test]
fn test_shared_board_parallel_queries() {
    let shared = SharedBoard::new(create_test_board(
        8,
        &[
            (PieceKind::Rook, Side::White, (4, 4)),
            (PieceKind::Pawn, Side::Black, (4, 6)),
        ],
    ));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(
                    shared.tally_at(Coordinate::new(4, 4)),
                    Some(MoveTally { moves: 12, captures: 1 })
                );
            });
        }
    });

    shared
        .add_piece(Piece::new(PieceKind::King, Side::White, Coordinate::new(4, 5), 8))
        .unwrap();
    assert_eq!(
        shared.tally_at(Coordinate::new(4, 4)),
        Some(MoveTally { moves: 10, captures: 0 })
    );
    assert_eq!(shared.tally_at(Coordinate::new(1, 1)), None);
}
