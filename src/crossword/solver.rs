#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver interface and its configuration.
//!
//! A solver is generic over a [`SolverConfig`], which picks the strategy for
//! each decision point of the search through associated types:
//!
//! - `Selector`: which slot to branch on ([`VariableSelection`]).
//! - `ValueOrder`: which word to try first ([`ValueOrdering`]).
//! - `Queue`: the AC-3 worklist discipline ([`ArcQueue`]).
//! - `Inference`: what to propagate after each trial ([`Inference`]).
//!
//! [`DefaultConfig`] is minimum remaining values with a degree tie-break,
//! least constraining value, a FIFO worklist, and no inference during
//! search.

use crate::crossword::arc_queue::{ArcFifo, ArcQueue};
use crate::crossword::backtracking::Backtracking;
use crate::crossword::inference::{Inference, NoInference};
use crate::crossword::puzzle::Puzzle;
use crate::crossword::solution::Solution;
use crate::crossword::value_ordering::{LeastConstrainingValue, ValueOrdering};
use crate::crossword::variable_selection::{MinimumRemainingValues, VariableSelection};
use crate::crossword::words::WordList;
use std::fmt::Debug;

/// Strategy bundle for a solver.
pub trait SolverConfig: Debug + Clone {
    /// Variable ordering.
    type Selector: VariableSelection;
    /// Value ordering.
    type ValueOrder: ValueOrdering;
    /// AC-3 worklist.
    type Queue: ArcQueue;
    /// Propagation after each trial assignment.
    type Inference: Inference;
}

/// The baseline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type Selector = MinimumRemainingValues;
    type ValueOrder = LeastConstrainingValue;
    type Queue = ArcFifo;
    type Inference = NoInference;
}

/// How a solve ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every slot was filled.
    Solved(Solution),
    /// No assignment satisfies the puzzle.
    Unsatisfiable,
    /// The node budget ran out before the search finished.
    LimitReached,
}

impl Outcome {
    /// The solution, if the puzzle was solved.
    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the solution if there is one.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Whether the puzzle was proven to have no solution.
    #[must_use]
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable)
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SolutionStats {
    /// Trial assignments made by the search.
    pub nodes: usize,
    /// Trial assignments that were undone.
    pub backtracks: usize,
    /// Arc revisions, both before and during the search.
    pub revisions: usize,
    /// Candidates removed by node consistency and AC-3.
    pub removals: usize,
    /// Deepest assignment reached.
    pub max_depth: usize,
    /// Whether AC-3 proved the puzzle unsatisfiable before the search ran.
    pub wiped_out_before_search: bool,
}

/// A crossword solver.
pub trait Solver<Config: SolverConfig = DefaultConfig> {
    /// Creates a solver for `puzzle` drawing on `words`.
    fn new(puzzle: Puzzle, words: WordList) -> Self;

    /// Runs the solve from scratch.
    fn solve(&mut self) -> Outcome;

    /// Counters from the most recent call to [`Solver::solve`].
    fn stats(&self) -> SolutionStats;
}

/// Solves `puzzle` from `words` with [`DefaultConfig`].
#[must_use]
pub fn solve(puzzle: &Puzzle, words: &WordList) -> Outcome {
    let mut solver: Backtracking<DefaultConfig> = Solver::new(puzzle.clone(), words.clone());
    solver.solve()
}
