//! Word list loading and validation.
//!
//! The dictionary is loaded once at startup and never mutated afterwards.
//! Solving works on [`Dictionary::working_copy`], a private set per request.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::letter::{Letter, LetterError};
use crate::WORD_LENGTH;

/// A word of exactly [`WORD_LENGTH`] letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([Letter; WORD_LENGTH]);

/// The set abstraction every index bucket and candidate set uses.
pub type WordSet = HashSet<Word>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("expected {expected} letters, found {found}")]
    Length { expected: usize, found: usize },
    #[error(transparent)]
    Letter(#[from] LetterError),
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read word list")]
    Io(#[from] io::Error),
    #[error("malformed word {word:?} on line {line}")]
    MalformedWord {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },
}

impl Word {
    /// Parse a word, folding uppercase to lowercase.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let count = s.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::Length {
                expected: WORD_LENGTH,
                found: count,
            });
        }
        let mut letters = [Letter::ALL[0]; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            *slot = Letter::try_from(c)?;
        }
        Ok(Word(letters))
    }

    pub fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.0.get(position).copied()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The full set of candidate words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: WordSet,
}

impl Dictionary {
    /// Build a dictionary from words that are already validated.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Read one word per line. Whitespace around each line is trimmed and
    /// blank lines are skipped; any other line must be a valid [`Word`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let lines = reader.lines().collect::<Result<Vec<String>, io::Error>>()?;

        let words = lines
            .par_iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                let word = line.trim();
                Word::parse(word).map_err(|source| DictionaryError::MalformedWord {
                    line: i + 1,
                    word: word.to_string(),
                    source,
                })
            })
            .collect::<Result<WordSet, DictionaryError>>()?;

        Ok(Self { words })
    }

    /// Load the word list at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// A private copy of every word, for a solve to consume.
    pub fn working_copy(&self) -> WordSet {
        self.words.clone()
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
