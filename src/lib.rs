//! # Wordle Suggest
//!
//! Filters a fixed-length word list down to the words consistent with what
//! earlier guesses revealed: letters known in position (green), letters
//! known present elsewhere (yellow) and letters known absent (gray).
//!
//! Each solve builds per-letter indices over a private copy of the
//! dictionary and narrows the candidates with set intersections and
//! subtractions.

pub mod constraints;
pub mod dictionary;
pub mod feedback;
pub mod index;
pub mod launcher;
pub mod letter;
pub mod server;
pub mod solver;
pub mod wire;

pub use constraints::{ConstraintError, Constraints, ConstraintsBuilder};
pub use dictionary::{Dictionary, DictionaryError, Word, WordError, WordSet};
pub use feedback::{Feedback, FeedbackPattern};
pub use index::{AnyIndex, LetterIndex, PositionIndex};
pub use letter::{Letter, LetterError};
pub use solver::{suggest_words, Solver};
pub use wire::{Outcome, RequestError, WireChoices};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Load the bundled sample word list.
pub fn load_sample_dictionary() -> Result<Dictionary, DictionaryError> {
    include_str!("../dictionary/words.txt").parse()
}
