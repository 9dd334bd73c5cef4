#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The candidate vocabulary.
//!
//! Words are interned once and referred to everywhere else by a dense
//! [`WordId`]. Ids follow first-encounter order in the supplied list, and
//! that order is the iteration order of every domain, which keeps the search
//! reproducible.

use crate::crossword::error::Error;
use rustc_hash::FxHashMap;
use std::ops::Index;
use std::str::FromStr;

/// Dense index of a word within its [`WordList`].
pub type WordId = usize;

/// A single candidate word with its characters split out for positional
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: Box<str>,
    chars: Box<[char]>,
}

impl Word {
    fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            chars: text.chars().collect(),
        }
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, which is what slot lengths are compared with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: empty words are rejected when the list is built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at position `k`.
    ///
    /// # Panics
    ///
    /// If `k` is out of bounds.
    #[must_use]
    pub fn char_at(&self, k: usize) -> char {
        self.chars[k]
    }

    /// The character at position `k`, or `None` past the end of the word.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<char> {
        self.chars.get(k).copied()
    }
}

/// De-duplicated, validated word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    ids: FxHashMap<Box<str>, WordId>,
}

impl WordList {
    /// Builds a word list, collapsing duplicates onto their first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// `Error::EmptyWord` if any entry is the empty string.
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();

        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(Error::EmptyWord { index });
            }
            if list.ids.contains_key(word) {
                continue;
            }
            list.ids.insert(word.into(), list.words.len());
            list.words.push(Word::new(word));
        }

        Ok(list)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up the id of `word`, if present.
    #[must_use]
    pub fn id(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Iterates over `(id, word)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

impl Index<WordId> for WordList {
    type Output = Word;

    fn index(&self, index: WordId) -> &Self::Output {
        &self.words[index]
    }
}

impl FromStr for WordList {
    type Err = Error;

    /// One word per line. Surrounding whitespace is trimmed and blank lines
    /// are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}
