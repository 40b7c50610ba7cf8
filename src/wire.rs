//! The JSON request schema and how its answers are reported.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::constraints::{ConstraintError, Constraints};
use crate::dictionary::{Dictionary, Word};
use crate::letter::{Letter, LetterError};
use crate::solver;

/// Returned to callers whose body does not fit [`WireChoices`].
pub const SCHEMA_HELP: &str = "Failed to unmarshal the application/json request. Expected Schema:
\t\"KnownInPosition\": map[int]string
\t\"KnownOutOfPosition\": string
\t\"KnownBad\": string
";

pub const NO_WORDS_MESSAGE: &str = "Unable to find any words.";

/// Choices as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireChoices {
    #[serde(rename = "KnownInPosition")]
    pub known_in_position: HashMap<String, String>,
    #[serde(rename = "KnownOutOfPosition")]
    pub known_out_of_position: String,
    #[serde(rename = "KnownBad")]
    pub known_bad: String,
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("position key {0:?} is not a decimal integer")]
    PositionKey(String),
    #[error("position {position} must hold exactly one letter, found {value:?}")]
    PositionValue { position: usize, value: String },
    #[error(transparent)]
    Letter(#[from] LetterError),
    #[error(transparent)]
    Constraint(ConstraintError),
}

impl RequestError {
    /// Letter conflicts are answered in the body rather than as a failed request.
    pub fn conflict(&self) -> Option<Letter> {
        match self {
            RequestError::Constraint(ConstraintError::ConflictingLetter(letter)) => Some(*letter),
            _ => None,
        }
    }

    /// The body a rejected request is answered with: the schema, then what was wrong.
    pub fn help_text(&self) -> String {
        format!("{SCHEMA_HELP}{self}")
    }
}

impl From<ConstraintError> for RequestError {
    fn from(err: ConstraintError) -> Self {
        RequestError::Constraint(err)
    }
}

impl WireChoices {
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn into_constraints(self) -> Result<Constraints, RequestError> {
        let mut builder = Constraints::builder();

        // Sorted so that validation errors do not depend on map iteration order.
        let mut positions: Vec<(String, String)> = self.known_in_position.into_iter().collect();
        positions.sort();
        for (key, value) in positions {
            let position: usize = key
                .parse()
                .map_err(|_| RequestError::PositionKey(key.clone()))?;
            let mut chars = value.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => Letter::try_from(c)?,
                _ => return Err(RequestError::PositionValue { position, value }),
            };
            builder.in_position(position, letter);
        }

        for c in self.known_out_of_position.chars() {
            builder.out_of_position(Letter::try_from(c)?);
        }
        for c in self.known_bad.chars() {
            builder.bad(Letter::try_from(c)?);
        }

        Ok(builder.build()?)
    }
}

/// What a well-formed request is answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Words(Vec<Word>),
    Empty,
    Conflict(Letter),
}

impl Outcome {
    /// The plain-text body for outcomes that are not a word list.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Words(_) => None,
            Outcome::Empty => Some(NO_WORDS_MESSAGE.to_string()),
            Outcome::Conflict(letter) => Some(ConstraintError::ConflictingLetter(*letter).to_string()),
        }
    }
}

/// Validate `choices` and solve them against `dictionary`.
pub fn answer(dictionary: &Dictionary, choices: WireChoices) -> Result<Outcome, RequestError> {
    let constraints = match choices.into_constraints() {
        Ok(constraints) => constraints,
        Err(err) => {
            return match err.conflict() {
                Some(letter) => Ok(Outcome::Conflict(letter)),
                None => Err(err),
            }
        }
    };

    let words = solver::suggest_words(dictionary, &constraints);
    if words.is_empty() {
        Ok(Outcome::Empty)
    } else {
        Ok(Outcome::Words(words))
    }
}
