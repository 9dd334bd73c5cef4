#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Orders the candidates of the slot the search is branching on.

use crate::crossword::assignment::Assignment;
use crate::crossword::domain::Domains;
use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::SlotId;
use crate::crossword::words::{WordId, WordList};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Debug;

/// Decides the order in which the words of a slot are tried.
pub trait ValueOrdering: Debug + Clone {
    /// Creates the ordering for `puzzle`.
    fn new(puzzle: &Puzzle) -> Self;

    /// Returns the candidates of `slot` in the order they should be tried.
    fn order(
        &mut self,
        puzzle: &Puzzle,
        words: &WordList,
        domains: &Domains,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<WordId>;
}

/// Candidates in domain order, which is word-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainOrder;

impl ValueOrdering for DomainOrder {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn order(
        &mut self,
        _: &Puzzle,
        _: &WordList,
        domains: &Domains,
        _: &Assignment,
        slot: SlotId,
    ) -> Vec<WordId> {
        domains[slot].iter().collect()
    }
}

/// Least constraining value first.
///
/// A candidate's score is the number of words it would rule out across the
/// domains of the slot's unassigned neighbours: for each neighbour, the words
/// whose letter in the shared cell differs from the candidate's. Candidates
/// are sorted by ascending score; equal scores keep domain order.
///
/// Assigned neighbours are skipped. Their words are already fixed and the
/// consistency check rejects a mismatching candidate outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeastConstrainingValue;

/// A neighbour's letter histogram at the shared cell.
struct NeighborLetters {
    index: usize,
    size: usize,
    counts: FxHashMap<char, usize>,
}

impl ValueOrdering for LeastConstrainingValue {
    fn new(_: &Puzzle) -> Self {
        Self
    }

    fn order(
        &mut self,
        puzzle: &Puzzle,
        words: &WordList,
        domains: &Domains,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<WordId> {
        let neighbors: SmallVec<[NeighborLetters; 8]> = puzzle
            .crossings_from(slot)
            .filter(|crossing| !assignment.is_assigned(crossing.other))
            .map(|crossing| {
                let domain = &domains[crossing.other];
                NeighborLetters {
                    index: crossing.index,
                    size: domain.len(),
                    counts: domain
                        .iter()
                        .map(|w| words[w].char_at(crossing.other_index))
                        .counts_by(|c| c)
                        .into_iter()
                        .collect(),
                }
            })
            .collect();

        domains[slot]
            .iter()
            .map(|w| {
                let word = &words[w];
                let ruled_out: usize = neighbors
                    .iter()
                    .map(|n| n.size - n.counts.get(&word.char_at(n.index)).copied().unwrap_or(0))
                    .sum();
                (w, ruled_out)
            })
            .sorted_by_key(|&(_, ruled_out)| ruled_out)
            .map(|(w, _)| w)
            .collect()
    }
}
