//! Narrowing a dictionary down to the words consistent with a set of constraints.
//!
//! A solve starts from every word as a candidate and applies each constraint
//! as a set operation against the indices:
//!
//! - a letter known in position intersects with `position_index[i][c]`,
//! - a letter known out of position intersects with `any_index[c]`,
//! - a bad letter subtracts `any_index[c]`.
//!
//! Out-of-position letters are matched anywhere in the word, including the
//! position where they were reported yellow. A word placing the letter back
//! in that spot is still a candidate.

use tracing::debug;

use crate::constraints::Constraints;
use crate::dictionary::{Dictionary, Word, WordSet};
use crate::index::{self, AnyIndex, PositionIndex};

/// Intersect two sets, keeping whichever is smaller and probing the larger.
pub fn intersect(a: WordSet, b: WordSet) -> WordSet {
    let (mut smaller, bigger) = if a.len() > b.len() { (b, a) } else { (a, b) };
    smaller.retain(|word| bigger.contains(word));
    smaller
}

/// One solve over a private copy of the dictionary.
///
/// The working sets are consumed while solving, so [`solve`](Self::solve)
/// takes the solver by value.
#[derive(Debug)]
pub struct Solver<'c> {
    constraints: &'c Constraints,
    position_index: PositionIndex,
    any_index: AnyIndex,
    words: WordSet,
}

impl<'c> Solver<'c> {
    pub fn new(dictionary: &Dictionary, constraints: &'c Constraints) -> Self {
        let words = dictionary.working_copy();
        let (position_index, any_index) = index::build(&words);
        Self::from_parts(words, position_index, any_index, constraints)
    }

    /// Solve over indices that were already built for `words`.
    pub fn from_parts(
        words: WordSet,
        position_index: PositionIndex,
        any_index: AnyIndex,
        constraints: &'c Constraints,
    ) -> Self {
        Self {
            constraints,
            position_index,
            any_index,
            words,
        }
    }

    /// The candidates consistent with every constraint, sorted.
    pub fn solve(mut self) -> Vec<Word> {
        let mut candidates = self.words;

        for (&position, &letter) in self.constraints.known_in_position() {
            candidates = intersect(candidates, self.position_index[position].take(letter));
        }

        for &letter in self.constraints.known_out_of_position() {
            candidates = intersect(candidates, self.any_index.take(letter));
        }

        for &letter in self.constraints.known_bad() {
            for word in &self.any_index[letter] {
                candidates.remove(word);
            }
        }

        let mut result: Vec<Word> = candidates.into_iter().collect();
        result.sort_unstable();
        debug!(candidates = result.len(), "solved constraints");
        result
    }
}

/// Build fresh indices from `dictionary` and solve `constraints` against them.
pub fn suggest_words(dictionary: &Dictionary, constraints: &Constraints) -> Vec<Word> {
    Solver::new(dictionary, constraints).solve()
}
