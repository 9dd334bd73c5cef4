#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Per-slot candidate sets.
//!
//! A domain is a list of word ids kept in ascending order, so iterating a
//! domain visits words in word-list order. Domains only ever shrink: the
//! consistency engine removes candidates and nothing adds them back. A fresh
//! solve builds a fresh `Domains`.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::SlotId;
use crate::crossword::words::{WordId, WordList};
use log::debug;
use std::ops::Index;

/// The candidates still possible for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Domain(Vec<WordId>);

impl Domain {
    /// Number of remaining candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every candidate has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `word` is still a candidate.
    #[must_use]
    pub fn contains(&self, word: WordId) -> bool {
        self.0.binary_search(&word).is_ok()
    }

    /// Iterates over the candidates in word-list order.
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.0.iter().copied()
    }

    /// Keeps only candidates satisfying `keep` and returns how many were
    /// removed.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&WordId) -> bool) -> usize {
        let before = self.0.len();
        self.0.retain(keep);
        before - self.0.len()
    }

    /// Narrows the domain to a single candidate.
    pub(crate) fn restrict_to(&mut self, word: WordId) {
        debug_assert!(self.contains(word));
        self.0.clear();
        self.0.push(word);
    }
}

/// One [`Domain`] per slot, indexed by [`SlotId`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains(Vec<Domain>);

impl Domains {
    /// Gives every slot of `puzzle` every word in `words`.
    #[must_use]
    pub fn initialize(puzzle: &Puzzle, words: &WordList) -> Self {
        let all = Domain((0..words.len()).collect());
        Self(vec![all; puzzle.num_slots()])
    }

    /// Removes every candidate whose length differs from its slot's length.
    /// Returns the number of removals, which is zero on any repeated call.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle, words: &WordList) -> usize {
        let removed: usize = self
            .0
            .iter_mut()
            .zip(puzzle.slots())
            .map(|(domain, slot)| domain.retain(|&w| words[w].len() == slot.length))
            .sum();

        debug!("node consistency removed {removed} candidates");
        removed
    }

    /// The domain of `slot`.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> &Domain {
        &self.0[slot]
    }

    pub(crate) fn get_mut(&mut self, slot: SlotId) -> &mut Domain {
        &mut self.0[slot]
    }

    /// Number of candidates left for `slot`.
    #[must_use]
    pub fn len(&self, slot: SlotId) -> usize {
        self.0[slot].len()
    }

    /// Whether `slot` has no candidates left.
    #[must_use]
    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.0[slot].is_empty()
    }

    /// Whether `word` is still a candidate for `slot`.
    #[must_use]
    pub fn contains(&self, slot: SlotId, word: WordId) -> bool {
        self.0[slot].contains(word)
    }

    /// Number of slots covered.
    #[must_use]
    pub fn num_slots(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(slot, domain)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Domain)> {
        self.0.iter().enumerate()
    }

    /// The first slot with an empty domain, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<SlotId> {
        self.0.iter().position(Domain::is_empty)
    }
}

impl Index<SlotId> for Domains {
    type Output = Domain;

    fn index(&self, index: SlotId) -> &Self::Output {
        &self.0[index]
    }
}
