//! Green/yellow/gray feedback for a guess.
//!
//! Players report what a guess revealed as a pattern such as `gybbb`; the
//! constraints builder turns those patterns into choices for the solver.

use std::fmt;

use crate::dictionary::Word;
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// A whole-word pattern packed in base 3, position 0 in the lowest digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub const ALL_CORRECT: Self = Self((Self::NUM_PATTERNS - 1) as u8);

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let pattern = feedbacks
            .iter()
            .rev()
            .fold(0u8, |acc, feedback| acc * 3 + feedback.digit());
        Self(pattern)
    }

    /// The pattern `guess` earns against `target`.
    ///
    /// Greens are assigned first; a repeated guess letter is yellow only while
    /// the target still has unmatched copies of it.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        for (i, (g, t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                feedback[i] = Feedback::Correct;
            } else {
                unmatched[t.index()] += 1;
            }
        }

        for (slot, g) in feedback.iter_mut().zip(guess.letters()) {
            if *slot != Feedback::Correct && unmatched[g.index()] > 0 {
                *slot = Feedback::Present;
                unmatched[g.index()] -= 1;
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        let feedbacks: Vec<Feedback> = s.chars().map(Feedback::from_char).collect::<Option<_>>()?;
        let feedbacks: [Feedback; WORD_LENGTH] = feedbacks.try_into().ok()?;
        Some(Self::new(feedbacks))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
