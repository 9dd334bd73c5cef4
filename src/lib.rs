#![deny(missing_docs)]
//! This crate fills crossword grids from a word list, treating the grid as a
//! constraint satisfaction problem solved with AC-3 and backtracking search.

/// The `crossword` module implements the puzzle model, domain narrowing and
/// the backtracking solver.
pub mod crossword;

pub use crossword::error::Error;
pub use crossword::grid::Grid;
pub use crossword::puzzle::Puzzle;
pub use crossword::solution::Solution;
pub use crossword::solver::{solve, Outcome};
pub use crossword::words::WordList;
