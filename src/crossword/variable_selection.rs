#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Branching heuristics.

use crate::crossword::assignment::Assignment;
use crate::crossword::domain::Domains;
use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::SlotId;
use itertools::Itertools;
use std::cmp::Reverse;
use std::fmt::Debug;

/// Seed used by [`RandomOrder`] until [`VariableSelection::reseed`] is called.
pub const DEFAULT_SEED: u64 = 0x5EED_C0DE;

/// Chooses which unassigned slot the search branches on next.
pub trait VariableSelection: Debug + Clone {
    /// Creates the selector for `puzzle`.
    fn new(puzzle: &Puzzle) -> Self;

    /// Picks an unassigned slot, or `None` when every slot is assigned.
    fn pick(&mut self, puzzle: &Puzzle, domains: &Domains, assignment: &Assignment)
        -> Option<SlotId>;

    /// Resets any internal randomness. Deterministic selectors ignore this.
    fn reseed(&mut self, _seed: u64) {}
}

/// Minimum remaining values, ties broken by highest degree, then by lowest
/// slot id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn pick(
        &mut self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        assignment
            .unassigned()
            .min_by_key(|&slot| (domains.len(slot), Reverse(puzzle.degree(slot))))
    }
}

/// The unassigned slot with the lowest id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn pick(&mut self, _: &Puzzle, _: &Domains, assignment: &Assignment) -> Option<SlotId> {
        assignment.unassigned().next()
    }
}

/// A uniformly random unassigned slot from a seeded generator. The same seed
/// gives the same sequence of picks.
#[derive(Debug, Clone)]
pub struct RandomOrder(fastrand::Rng);

impl VariableSelection for RandomOrder {
    fn new(_: &Puzzle) -> Self {
        Self(fastrand::Rng::with_seed(DEFAULT_SEED))
    }

    fn pick(&mut self, _: &Puzzle, _: &Domains, assignment: &Assignment) -> Option<SlotId> {
        let candidates = assignment.unassigned().collect_vec();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.0.usize(..candidates.len())])
    }

    fn reseed(&mut self, seed: u64) {
        self.0.seed(seed);
    }
}
