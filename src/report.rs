//! Report rendering
//!
//! A successful setup renders as one `<moves> <captures>` line per piece, in
//! description order. A rejected setup renders as the single error message.
//! Every line ends with a newline.

use crate::setup::{Setup, SetupError, SetupResult};

/// Render the move and capture counts of every piece
pub fn render(setup: &Setup) -> String {
    setup
        .tallies()
        .map(|tally| format!("{} {}\n", tally.moves, tally.captures))
        .collect()
}

pub fn render_error(err: &SetupError) -> String {
    format!("{err}\n")
}

/// Render whichever report the outcome calls for
pub fn render_outcome(outcome: &SetupResult<Setup>) -> String {
    match outcome {
        Ok(setup) => render(setup),
        Err(err) => render_error(err),
    }
}
