//! Input errors raised while building a puzzle or a word list.
//!
//! These are the only fatal conditions in the crate. An unsatisfiable puzzle
//! is a normal outcome of solving and is reported through
//! [`Outcome`](crate::crossword::solver::Outcome) instead.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Malformed input detected before any solving starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// The grid has no rows, or its rows have no cells.
    EmptyGrid,
    /// A row's width differs from the width of the first row.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The word list contains an empty string.
    EmptyWord {
        /// Position of the empty entry in the supplied list.
        index: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells but the grid is {expected} cells wide"
            ),
            Self::EmptyWord { index } => write!(f, "word list entry {index} is empty"),
        }
    }
}

impl error::Error for Error {}
