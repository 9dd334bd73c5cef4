#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Slots: maximal runs of fillable cells.

use std::fmt::{self, Display, Formatter};

/// Dense index of a slot within its [`Puzzle`](crate::crossword::puzzle::Puzzle).
pub type SlotId = usize;

/// Orientation of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A maximal run of fillable cells that receives one word.
///
/// Two slots are equal iff start cell, length and direction all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    /// Number of cells, always at least 1.
    pub length: usize,
    /// Orientation.
    pub direction: Direction,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(row: usize, col: usize, length: usize, direction: Direction) -> Self {
        debug_assert!(length >= 1);
        Self {
            row,
            col,
            length,
            direction,
        }
    }

    /// The grid cell holding character `k` of this slot.
    #[must_use]
    pub const fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Iterates over the cells of the slot in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let slot = *self;
        (0..slot.length).map(move |k| slot.cell(k))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} {}",
            self.row, self.col, self.direction, self.length
        )
    }
}
