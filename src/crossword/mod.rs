#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Crossword filling as a constraint satisfaction problem.
//!
//! Slots are the variables, words from a [`words::WordList`] are the values.
//! Two slots sharing a cell must agree on its letter, and no word is used
//! twice. Solving narrows domains with node and arc consistency before a
//! backtracking search.

pub mod arc_queue;
pub mod assignment;
pub mod backtracking;
pub mod consistency;
pub mod domain;
pub mod error;
pub mod grid;
pub mod inference;
pub mod puzzle;
pub mod slot;
pub mod solution;
pub mod solver;
pub mod value_ordering;
pub mod variable_selection;
pub mod words;
