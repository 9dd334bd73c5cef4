#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Completed fills.

use crate::crossword::assignment::Assignment;
use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::{Slot, SlotId};
use crate::crossword::words::WordList;

/// A complete fill: one word per slot, plus the letter in every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    height: usize,
    width: usize,
    entries: Vec<(Slot, Box<str>)>,
    letters: Vec<Option<char>>,
}

impl Solution {
    /// Freezes a complete `assignment` for `puzzle`.
    pub(crate) fn new(puzzle: &Puzzle, words: &WordList, assignment: &Assignment) -> Self {
        debug_assert!(assignment.is_complete());

        let (height, width) = (puzzle.height(), puzzle.width());
        let mut letters = vec![None; height * width];
        let mut entries = Vec::with_capacity(puzzle.num_slots());

        for (slot, word) in assignment.iter() {
            let slot = *puzzle.slot(slot);
            let word = &words[word];
            for (k, (row, col)) in slot.cells().enumerate() {
                letters[row * width + col] = Some(word.char_at(k));
            }
            entries.push((slot, word.as_str().into()));
        }

        Self {
            height,
            width,
            entries,
            letters,
        }
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the puzzle had no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The word in the slot with id `slot`.
    #[must_use]
    pub fn word(&self, slot: SlotId) -> Option<&str> {
        self.entries.get(slot).map(|(_, word)| &**word)
    }

    /// The word in `slot`, looked up by value.
    #[must_use]
    pub fn get(&self, slot: &Slot) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == slot)
            .map(|(_, word)| &**word)
    }

    /// Iterates over `(slot, word)` pairs in slot-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &str)> {
        self.entries.iter().map(|(slot, word)| (slot, &**word))
    }

    /// The letter in cell (`row`, `col`), or `None` for blocked cells, cells
    /// outside the grid, and fillable cells that belong to no slot.
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.letters[row * self.width + col]
    }

    /// The letters of the whole grid, row by row.
    #[must_use]
    pub fn letter_grid(&self) -> Vec<Vec<Option<char>>> {
        self.letters.chunks(self.width).map(<[_]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::slot::Direction;

    fn solved() -> (Puzzle, Solution) {
        let puzzle = Puzzle::new("#_##\n____\n#_##".parse().unwrap());
        let words = WordList::new(["dog", "cold"]).unwrap();
        let mut assignment = Assignment::new(puzzle.num_slots());
        assignment.push(1, 1);
        assignment.push(0, 0);
        let solution = Solution::new(&puzzle, &words, &assignment);
        (puzzle, solution)
    }

    #[test]
    fn test_letter_at() {
        let (_, solution) = solved();
        assert_eq!(solution.letter_at(0, 1), Some('d'));
        assert_eq!(solution.letter_at(1, 1), Some('o'));
        assert_eq!(solution.letter_at(1, 3), Some('d'));
        assert_eq!(solution.letter_at(0, 0), None);
        assert_eq!(solution.letter_at(9, 9), None);
    }

    #[test]
    fn test_letter_grid() {
        let (_, solution) = solved();
        assert_eq!(
            solution.letter_grid(),
            vec![
                vec![None, Some('d'), None, None],
                vec![Some('c'), Some('o'), Some('l'), Some('d')],
                vec![None, Some('g'), None, None],
            ]
        );
    }

    #[test]
    fn test_words_by_id_and_slot() {
        let (puzzle, solution) = solved();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.word(0), Some("dog"));
        assert_eq!(solution.word(1), Some("cold"));
        assert_eq!(solution.word(2), None);
        assert_eq!(solution.get(&Slot::new(1, 0, 4, Direction::Across)), Some("cold"));
        assert!(puzzle.verify(&solution));
    }

    #[test]
    fn test_verify_rejects_mismatched_crossing() {
        let puzzle = Puzzle::new("#_##\n____\n#_##".parse().unwrap());
        let words = WordList::new(["cat", "cold"]).unwrap();
        let mut assignment = Assignment::new(puzzle.num_slots());
        assignment.push(0, 0);
        assignment.push(1, 1);
        let solution = Solution::new(&puzzle, &words, &assignment);
        assert!(!puzzle.verify(&solution));
    }

    #[test]
    fn test_verify_rejects_other_puzzle() {
        let (_, solution) = solved();
        let other = Puzzle::new("___\n###\n___".parse().unwrap());
        assert!(!other.verify(&solution));
    }
}
