//! The alphabet words are built from.
//!
//! Letters are validated once at the boundary (dictionary load, wire input,
//! command line) and carried as an alphabet index from then on.

use std::fmt;

use thiserror::Error;

use crate::ALPHABET_SIZE;

/// A lowercase ASCII letter, stored as its position in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    #[error("{0:?} is not a letter of the alphabet")]
    InvalidLetter(char),
}

impl Letter {
    /// Every letter of the alphabet, in order.
    pub const ALL: [Letter; ALPHABET_SIZE] = {
        let mut all = [Letter(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            all[i] = Letter(i as u8);
            i += 1;
        }
        all
    };

    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then(|| Letter(index as u8))
    }

    /// Position in the alphabet, `0` for `a`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    /// Uppercase ASCII is folded to lowercase; anything else outside `a..=z` is rejected.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Letter(lower as u8 - b'a'))
        } else {
            Err(LetterError::InvalidLetter(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
