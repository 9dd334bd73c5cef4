#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The partial assignment built up by the search.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::SlotId;
use crate::crossword::words::{WordId, WordList};
use rustc_hash::FxHashSet;
use std::ops::Index;

/// A partial mapping from slots to words, built as a stack.
///
/// `push` records a choice and `pop` undoes the most recent one, so the
/// search never copies the assignment. The set of used words is kept next to
/// the trail to make the no-reuse check constant time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    trail: Vec<SlotId>,
    used: FxHashSet<WordId>,
}

impl Index<SlotId> for Assignment {
    type Output = Option<WordId>;

    fn index(&self, index: SlotId) -> &Self::Output {
        &self.words[index]
    }
}

impl Assignment {
    /// An empty assignment over `num_slots` slots.
    #[must_use]
    pub fn new(num_slots: usize) -> Self {
        Self {
            words: vec![None; num_slots],
            trail: Vec::with_capacity(num_slots),
            used: FxHashSet::default(),
        }
    }

    /// The word assigned to `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.words[slot]
    }

    /// Whether `slot` has a word.
    #[must_use]
    pub fn is_assigned(&self, slot: SlotId) -> bool {
        self.words[slot].is_some()
    }

    /// Whether `word` is already used by some slot.
    #[must_use]
    pub fn is_used(&self, word: WordId) -> bool {
        self.used.contains(&word)
    }

    /// Number of assigned slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Whether nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Whether every slot has a word.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.trail.len() == self.words.len()
    }

    /// Assigns `word` to `slot`.
    pub fn push(&mut self, slot: SlotId, word: WordId) {
        debug_assert!(self.words[slot].is_none(), "slot {slot} assigned twice");
        debug_assert!(!self.used.contains(&word), "word {word} used twice");
        self.words[slot] = Some(word);
        self.used.insert(word);
        self.trail.push(slot);
    }

    /// Undoes the most recent assignment and returns it.
    pub fn pop(&mut self) -> Option<(SlotId, WordId)> {
        let slot = self.trail.pop()?;
        let word = self.words[slot].take()?;
        self.used.remove(&word);
        Some((slot, word))
    }

    /// Slots in the order they were assigned.
    #[must_use]
    pub fn trail(&self) -> &[SlotId] {
        &self.trail
    }

    /// Iterates over assigned `(slot, word)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(slot, word)| word.map(|w| (slot, w)))
    }

    /// Iterates over slots that have no word yet.
    pub fn unassigned(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(slot, word)| word.is_none().then_some(slot))
    }

    /// Whether assigning `word` to the unassigned `slot` keeps the assignment
    /// consistent: the length fits, the word is not used elsewhere, and every
    /// assigned neighbour has the same letter in the shared cell.
    ///
    /// Unassigned neighbours are not looked at.
    #[must_use]
    pub fn admits(&self, puzzle: &Puzzle, words: &WordList, slot: SlotId, word: WordId) -> bool {
        let candidate = &words[word];

        if candidate.len() != puzzle.slot(slot).length || self.is_used(word) {
            return false;
        }

        puzzle.crossings_from(slot).all(|crossing| {
            self.words[crossing.other].is_none_or(|other| {
                candidate.char_at(crossing.index) == words[other].char_at(crossing.other_index)
            })
        })
    }
}
