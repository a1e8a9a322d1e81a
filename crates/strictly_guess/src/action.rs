//! First-class action types for the guessing game.
//!
//! Guesses are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::types::Feedback;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A guess submitted by the player.
///
/// Guesses are first-class domain events that can be:
/// - Parsed and validated before application
/// - Serialized for replay
/// - Logged for debugging
///
/// Any `i64` is a legal guess, including negatives and values outside
/// the session bounds; out-of-range guesses simply earn feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guess(i64);

impl Guess {
    /// Creates a new guess.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the guessed value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Guess {
    type Err = GuessError;

    /// Parses a line of input as a guess.
    ///
    /// The input is trimmed, then read as an optionally-signed base-10
    /// integer. Anything else (empty line, non-numeric text, a decimal
    /// like `3.5`) is an [`GuessError::InvalidFormat`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Guess::new)
            .map_err(|_| GuessError::InvalidFormat(trimmed.to_string()))
    }
}

/// Error that can occur when reading a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The input could not be parsed as a base-10 integer.
    #[display("invalid guess {:?}: expected a base-10 integer", _0)]
    InvalidFormat(String),
}

impl std::error::Error for GuessError {}

/// One entry in a session's history: a guess and the feedback it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct GuessRecord {
    /// The guess that was made.
    guess: Guess,
    /// The feedback the guess earned.
    feedback: Feedback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        let guess: Guess = "42".parse().expect("valid guess");
        assert_eq!(guess.value(), 42);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let guess: Guess = "  7\n".parse().expect("valid guess");
        assert_eq!(guess.value(), 7);
    }

    #[test]
    fn test_parse_signed_values() {
        let negative: Guess = "-12".parse().expect("valid guess");
        assert_eq!(negative.value(), -12);

        let positive: Guess = "+3".parse().expect("valid guess");
        assert_eq!(positive.value(), 3);
    }

    #[test]
    fn test_parse_rejects_text() {
        let result = "abc".parse::<Guess>();
        assert!(matches!(result, Err(GuessError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let result = "".parse::<Guess>();
        assert!(matches!(result, Err(GuessError::InvalidFormat(_))));

        let result = "   \n".parse::<Guess>();
        assert!(matches!(result, Err(GuessError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_decimals() {
        let result = "3.5".parse::<Guess>();
        assert!(matches!(result, Err(GuessError::InvalidFormat(_))));
    }

    #[test]
    fn test_error_reports_offending_input() {
        let err = "abc".parse::<Guess>().unwrap_err();
        assert_eq!(err.to_string(), "invalid guess \"abc\": expected a base-10 integer");
    }

    #[test]
    fn test_display_matches_parsed_value() {
        for input in ["42", "-12", "0", "101"] {
            let guess: Guess = input.parse().expect("valid guess");
            assert_eq!(guess.to_string(), input);
        }
    }
}
