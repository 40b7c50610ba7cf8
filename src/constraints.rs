//! What previous guesses have revealed about the answer.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::dictionary::Word;
use crate::feedback::{Feedback, FeedbackPattern};
use crate::letter::Letter;
use crate::WORD_LENGTH;

/// A validated set of choices. The bad letters never overlap the good ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    known_in_position: BTreeMap<usize, Letter>,
    known_out_of_position: BTreeSet<Letter>,
    known_bad: BTreeSet<Letter>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("position {position} is outside a {}-letter word", WORD_LENGTH)]
    PositionOutOfRange { position: usize },
    #[error("position {position} is given both '{first}' and '{second}'")]
    ConflictingPosition {
        position: usize,
        first: Letter,
        second: Letter,
    },
    #[error("Conflicting configuration with letter '{0}'.")]
    ConflictingLetter(Letter),
}

impl Constraints {
    /// Validate and build a constraint set in one call.
    pub fn new(
        known_in_position: impl IntoIterator<Item = (usize, Letter)>,
        known_out_of_position: impl IntoIterator<Item = Letter>,
        known_bad: impl IntoIterator<Item = Letter>,
    ) -> Result<Self, ConstraintError> {
        let mut builder = Self::builder();
        for (position, letter) in known_in_position {
            builder.in_position(position, letter);
        }
        for letter in known_out_of_position {
            builder.out_of_position(letter);
        }
        for letter in known_bad {
            builder.bad(letter);
        }
        builder.build()
    }

    pub fn builder() -> ConstraintsBuilder {
        ConstraintsBuilder::default()
    }

    pub fn known_in_position(&self) -> &BTreeMap<usize, Letter> {
        &self.known_in_position
    }

    pub fn known_out_of_position(&self) -> &BTreeSet<Letter> {
        &self.known_out_of_position
    }

    pub fn known_bad(&self) -> &BTreeSet<Letter> {
        &self.known_bad
    }

    /// Every letter known to be in the answer.
    pub fn known_good(&self) -> BTreeSet<Letter> {
        self.known_in_position
            .values()
            .chain(self.known_out_of_position.iter())
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.known_in_position.is_empty()
            && self.known_out_of_position.is_empty()
            && self.known_bad.is_empty()
    }
}

/// Collects choices in input order and validates them on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ConstraintsBuilder {
    in_position: Vec<(usize, Letter)>,
    out_of_position: Vec<Letter>,
    bad: Vec<Letter>,
    // Gray letters from feedback; dropped if the letter turns up green or yellow.
    absent: Vec<Letter>,
}

impl ConstraintsBuilder {
    pub fn in_position(&mut self, position: usize, letter: Letter) -> &mut Self {
        self.in_position.push((position, letter));
        self
    }

    pub fn out_of_position(&mut self, letter: Letter) -> &mut Self {
        self.out_of_position.push(letter);
        self
    }

    pub fn bad(&mut self, letter: Letter) -> &mut Self {
        self.bad.push(letter);
        self
    }

    /// Record the feedback one guess received.
    ///
    /// A gray letter only becomes bad if no guess showed it green or yellow,
    /// so repeated letters in a guess never produce a conflict.
    pub fn record_guess(&mut self, guess: &Word, pattern: FeedbackPattern) -> &mut Self {
        for (position, (&letter, feedback)) in guess
            .letters()
            .iter()
            .zip(pattern.to_feedbacks())
            .enumerate()
        {
            match feedback {
                Feedback::Correct => {
                    self.in_position(position, letter);
                }
                Feedback::Present => {
                    self.out_of_position(letter);
                }
                Feedback::Absent => self.absent.push(letter),
            }
        }
        self
    }

    pub fn build(&self) -> Result<Constraints, ConstraintError> {
        let mut known_in_position = BTreeMap::new();
        for &(position, letter) in &self.in_position {
            if position >= WORD_LENGTH {
                return Err(ConstraintError::PositionOutOfRange { position });
            }
            if let Some(&first) = known_in_position.get(&position) {
                if first != letter {
                    return Err(ConstraintError::ConflictingPosition {
                        position,
                        first,
                        second: letter,
                    });
                }
            }
            known_in_position.insert(position, letter);
        }

        let known_out_of_position: BTreeSet<Letter> =
            self.out_of_position.iter().copied().collect();

        let known_good: BTreeSet<Letter> = known_in_position
            .values()
            .chain(known_out_of_position.iter())
            .copied()
            .collect();

        let mut known_bad = BTreeSet::new();
        for &letter in &self.bad {
            if known_good.contains(&letter) {
                return Err(ConstraintError::ConflictingLetter(letter));
            }
            known_bad.insert(letter);
        }
        known_bad.extend(
            self.absent
                .iter()
                .copied()
                .filter(|letter| !known_good.contains(letter)),
        );

        Ok(Constraints {
            known_in_position,
            known_out_of_position,
            known_bad,
        })
    }
}
