//! Board setup - turning a text description into a validated board
//!
//! Reads a board description, enforces the configured limits and the
//! placement rules, and produces a [`Setup`] ready for querying.
//!
//! # Description Format
//!
//! ```text
//! 8                 board size N
//! 3                 number of pieces M
//! King White 1 1    M lines of <Name> <Color> <x> <y>
//! King Black 8 8
//! Rook White 4 4
//! ```
//!
//! # Validation Order
//!
//! The first failure wins:
//! 1. Board size is an integer within the configured range
//! 2. Piece count is an integer within `min_pieces..=N*N`
//! 3. Exactly M piece lines follow
//! 4. Each line, in order: four fields, known name, known color, integer
//!    coordinates, free on-board square
//! 5. Exactly one king per side
//!
//! # Module Structure
//!
//! - `reader` - Line splitting and field extraction
//! - `error` - [`SetupError`] with the report messages

pub mod error;
pub mod reader;


use chess_engine::{Board, BoardSize, Coordinate, MoveTally, Piece, PieceKind, Side};
use tracing::{debug, warn};

use crate::config::SetupLimits;
pub use error::{SetupError, SetupResult};
use reader::{parse_piece_line, DescriptionReader};

/// A validated board and the order its pieces were described in
#[derive(Debug, Clone)]
pub struct Setup {
    board: Board,
    order: Vec<Coordinate>,
}

impl Setup {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the pieces in description order
    pub fn order(&self) -> &[Coordinate] {
        &self.order
    }

    /// Move and capture counts for every piece in description order
    pub fn tallies(&self) -> impl Iterator<Item = MoveTally> + '_ {
        self.order.iter().filter_map(|&at| {
            self.board
                .get_piece(at)
                .map(|piece| self.board.get_piece_tally(piece))
        })
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Parse and validate a board description
///
/// # Arguments
///
/// * `text` - The full description
/// * `limits` - Board size range and minimum piece count
///
/// # Examples
///
/// ```rust
/// use xfchess_counter::config::SetupLimits;
/// use xfchess_counter::setup::load_setup;
///
/// let setup = load_setup("3\n2\nKing White 1 1\nKing Black 3 3\n", &SetupLimits::default()).unwrap();
/// assert_eq!(setup.order().len(), 2);
/// ```
pub fn load_setup(text: &str, limits: &SetupLimits) -> SetupResult<Setup> {
    let mut reader = DescriptionReader::new(text);

    let raw_size = reader.next_number()?;
    if !limits.board_size_allowed(raw_size) {
        warn!("[SETUP] Board size {} outside {:?}", raw_size, limits);
        return Err(SetupError::InvalidBoardSize);
    }
    let size = BoardSize::try_from(raw_size).map_err(|_| SetupError::InvalidBoardSize)?;

    let piece_count = reader.next_number()?;
    if !limits.piece_count_allowed(size, piece_count) {
        warn!(
            "[SETUP] Piece count {} not allowed on a board of size {}",
            piece_count, size
        );
        return Err(SetupError::InvalidNumberOfPieces);
    }

    let piece_lines = reader.into_piece_lines();
    if piece_lines.len() as i64 != piece_count {
        warn!(
            "[SETUP] Expected {} piece lines, found {}",
            piece_count,
            piece_lines.len()
        );
        return Err(SetupError::InvalidNumberOfPieces);
    }

    let mut board = Board::new(size);
    let mut order = Vec::with_capacity(piece_lines.len());

    for (line_no, line) in piece_lines {
        let piece = read_piece(line, size).inspect_err(|err| {
            warn!("[SETUP] Line {}: {} ({:?})", line_no, err, line);
        })?;
        let at = piece.coordinate();
        board.add_piece(piece).map_err(|err| {
            warn!("[SETUP] Line {}: {}", line_no, err);
            SetupError::from(err)
        })?;
        debug!("[SETUP] Placed piece at {}", at);
        order.push(at);
    }

    check_kings(&board)?;

    Ok(Setup { board, order })
}

fn read_piece(line: &str, size: BoardSize) -> SetupResult<Piece> {
    let fields = parse_piece_line(line)?;
    let kind = PieceKind::parse(fields.name)?;
    let side = Side::parse(fields.color)?;
    let (x, y) = fields.coordinates()?;

    // Anything beyond i32 is off every board
    let x = i32::try_from(x).map_err(|_| SetupError::InvalidPiecePosition)?;
    let y = i32::try_from(y).map_err(|_| SetupError::InvalidPiecePosition)?;

    Ok(Piece::new(kind, side, Coordinate::new(x, y), size))
}

/// Require exactly one king for each side
fn check_kings(board: &Board) -> SetupResult<()> {
    let kings = |side| {
        board
            .pieces()
            .filter(|p| p.kind() == PieceKind::King && p.side() == side)
            .count()
    };

    let (white, black) = (kings(Side::White), kings(Side::Black));
    if white != 1 || black != 1 {
        warn!("[SETUP] Found {} white and {} black kings", white, black);
        return Err(SetupError::InvalidGivenKings);
    }
    Ok(())
}
