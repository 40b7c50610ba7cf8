//! Letter membership indices over a word set.
//!
//! Both indices are dense: every letter of the alphabet has a bucket at every
//! position, empty or not, so lookups never have to handle a missing key.

use std::ops::{Index, IndexMut};

use crate::dictionary::{Word, WordSet};
use crate::letter::Letter;
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Words grouped by letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterIndex {
    buckets: [WordSet; ALPHABET_SIZE],
}

/// `position_index[i][c]` holds the words with `c` at position `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    positions: [LetterIndex; WORD_LENGTH],
}

/// `any_index[c]` holds the words containing `c` anywhere.
pub type AnyIndex = LetterIndex;

impl LetterIndex {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| WordSet::new()),
        }
    }

    /// Move a bucket out, leaving it empty.
    pub fn take(&mut self, letter: Letter) -> WordSet {
        std::mem::take(&mut self.buckets[letter.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, &WordSet)> {
        Letter::ALL.into_iter().zip(self.buckets.iter())
    }
}

impl Default for LetterIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Letter> for LetterIndex {
    type Output = WordSet;

    fn index(&self, letter: Letter) -> &WordSet {
        &self.buckets[letter.index()]
    }
}

impl IndexMut<Letter> for LetterIndex {
    fn index_mut(&mut self, letter: Letter) -> &mut WordSet {
        &mut self.buckets[letter.index()]
    }
}

impl PositionIndex {
    pub fn new() -> Self {
        Self {
            positions: std::array::from_fn(|_| LetterIndex::new()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LetterIndex> {
        self.positions.iter()
    }
}

impl Default for PositionIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for PositionIndex {
    type Output = LetterIndex;

    fn index(&self, position: usize) -> &LetterIndex {
        &self.positions[position]
    }
}

impl IndexMut<usize> for PositionIndex {
    fn index_mut(&mut self, position: usize) -> &mut LetterIndex {
        &mut self.positions[position]
    }
}

/// Build the position and any-letter indices in a single pass over `words`.
pub fn build<'a>(words: impl IntoIterator<Item = &'a Word>) -> (PositionIndex, AnyIndex) {
    let mut position_index = PositionIndex::new();
    let mut any_index = AnyIndex::new();

    for &word in words {
        for (position, &letter) in word.letters().iter().enumerate() {
            position_index[position][letter].insert(word);
            any_index[letter].insert(word);
        }
    }

    (position_index, any_index)
}
