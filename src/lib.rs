//! # xfchess_counter
//!
//! Reads a board description, validates it and reports how many moves and
//! captures every piece has. Counting itself lives in the `chess_engine`
//! crate; this crate adds the description format, the limits and the report.
//!
//! ## Module Organization
//!
//! - `config` - Board size and piece count limits
//! - `setup` - Description reader and validator
//! - `report` - Output text for a setup or a rejection

pub mod config;
pub mod report;
pub mod setup;

pub use config::SetupLimits;
pub use setup::{load_setup, Setup, SetupError, SetupResult};

/// Validate a description and render its report in one step
///
/// # Examples
///
/// ```rust
/// use xfchess_counter::{count_moves, SetupLimits};
///
/// let report = count_moves("3\n2\nKing White 1 1\nKing Black 3 3\n", &SetupLimits::default());
/// assert_eq!(report, "3 0\n3 0\n");
/// ```
pub fn count_moves(text: &str, limits: &SetupLimits) -> String {
    report::render_outcome(&load_setup(text, limits))
}
