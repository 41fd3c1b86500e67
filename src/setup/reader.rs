//! Board description reader
//!
//! Splits a description into its header numbers and piece lines. Blank lines
//! and surrounding whitespace are ignored. The reader only checks shape; the
//! limits and placement rules are applied by [`super::load_setup`].

use super::error::{SetupError, SetupResult};

/// One `<Name> <Color> <x> <y>` line, fields not yet interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceLine<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}

impl PieceLine<'_> {
    /// Parse the two coordinate fields
    pub fn coordinates(&self) -> SetupResult<(i64, i64)> {
        let x = self.x.parse().map_err(|_| SetupError::InvalidInput)?;
        let y = self.y.parse().map_err(|_| SetupError::InvalidInput)?;
        Ok((x, y))
    }
}

/// Sequential reader over the lines of a description that have content
///
/// Each line is paired with its 1-based line number in the original text.
#[derive(Debug, Clone)]
pub struct DescriptionReader<'a> {
    lines: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> DescriptionReader<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<(usize, &'a str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        DescriptionReader {
            lines: lines.into_iter(),
        }
    }

    /// Read a line holding a single integer
    pub fn next_number(&mut self) -> SetupResult<i64> {
        let (_, text) = self.lines.next().ok_or(SetupError::InvalidInput)?;
        text.parse().map_err(|_| SetupError::InvalidInput)
    }

    /// Everything after the header lines
    pub fn into_piece_lines(self) -> Vec<(usize, &'a str)> {
        self.lines.collect()
    }
}

/// Split a piece line into its four fields
///
/// Fails with `InvalidInput` unless the line has exactly four fields.
pub fn parse_piece_line(line: &str) -> SetupResult<PieceLine<'_>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[name, color, x, y] = fields.as_slice() else {
        return Err(SetupError::InvalidInput);
    };

    Ok(PieceLine { name, color, x, y })
}
