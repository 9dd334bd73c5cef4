#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The crossword structure: a rectangular grid of fillable and blocked cells.

use crate::crossword::error::Error;
use itertools::Itertools;
use std::str::FromStr;

/// Character marking a fillable cell in the text form of a grid.
pub const FILLABLE: char = '_';

/// A validated `height` x `width` grid of fillable (`true`) and blocked
/// (`false`) cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from its rows.
    ///
    /// # Errors
    ///
    /// `Error::EmptyGrid` if there are no rows or the first row is empty,
    /// `Error::RaggedRow` if any row differs in width from the first.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (`row`, `col`) can hold a letter. Cells outside
    /// the grid are treated as blocked.
    #[must_use]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Iterates over the rows as boolean slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses one row per line. `_` is fillable, anything else is blocked.
    /// Trailing blank lines are dropped; blank lines in the middle are rows
    /// of width zero and make the grid ragged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .map(|line| line.chars().map(|c| c == FILLABLE).collect_vec())
            .collect_vec();

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        Self::new(rows)
    }
}
