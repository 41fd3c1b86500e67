//! Setup limits configuration
//!
//! Loads [`SetupLimits`] from an optional JSON file. Fields missing from the
//! file fall back to their defaults, and command-line overrides are applied on
//! top by the binary.
//!
//! # File Format
//!
//! ```json
//! { "min_board_size": 3, "max_board_size": 1000, "min_pieces": 2 }
//! ```
//!
//! The maximum number of pieces is always the number of squares, `N * N`.

use std::fs;
use std::path::Path;

use chess_engine::BoardSize;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_MIN_BOARD_SIZE: BoardSize = 3;
pub const DEFAULT_MAX_BOARD_SIZE: BoardSize = 1000;
pub const DEFAULT_MIN_PIECES: usize = 2;

/// Errors that can occur while loading limits
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Limits file I/O error
    #[error("Limits I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Limits deserialization error
    #[error("Limits parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid board size range {min}..={max}")]
    InvalidBoardSizeRange { min: BoardSize, max: BoardSize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Bounds the setup validator enforces on a board description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetupLimits {
    pub min_board_size: BoardSize,
    pub max_board_size: BoardSize,
    pub min_pieces: usize,
}

impl Default for SetupLimits {
    fn default() -> Self {
        SetupLimits {
            min_board_size: DEFAULT_MIN_BOARD_SIZE,
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
            min_pieces: DEFAULT_MIN_PIECES,
        }
    }
}

impl SetupLimits {
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let limits: SetupLimits = serde_json::from_str(text)?;
        limits.validate()
    }

    /// Read limits from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let limits = Self::from_json(&fs::read_to_string(path)?)?;
        info!("[CONFIG] Loaded limits from {:?}: {:?}", path, limits);
        Ok(limits)
    }

    /// Replace individual bounds, keeping the rest
    pub fn with_overrides(
        mut self,
        min_board_size: Option<BoardSize>,
        max_board_size: Option<BoardSize>,
        min_pieces: Option<usize>,
    ) -> ConfigResult<Self> {
        if let Some(min) = min_board_size {
            self.min_board_size = min;
        }
        if let Some(max) = max_board_size {
            self.max_board_size = max;
        }
        if let Some(min) = min_pieces {
            self.min_pieces = min;
        }
        self.validate()
    }

    /// Reject empty or non-positive board size ranges
    pub fn validate(self) -> ConfigResult<Self> {
        if self.min_board_size < 1 || self.min_board_size > self.max_board_size {
            return Err(ConfigError::InvalidBoardSizeRange {
                min: self.min_board_size,
                max: self.max_board_size,
            });
        }
        Ok(self)
    }

    #[inline]
    pub fn board_size_allowed(&self, size: i64) -> bool {
        (i64::from(self.min_board_size)..=i64::from(self.max_board_size)).contains(&size)
    }

    /// Number of squares on a board of `size`
    #[inline]
    pub fn max_pieces(&self, size: BoardSize) -> i64 {
        i64::from(size) * i64::from(size)
    }

    #[inline]
    pub fn piece_count_allowed(&self, size: BoardSize, count: i64) -> bool {
        count >= self.min_pieces as i64 && count <= self.max_pieces(size)
    }
}
