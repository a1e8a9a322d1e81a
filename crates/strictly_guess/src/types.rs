//! Core domain types for the number-guessing game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Inclusive range of values the secret may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest value the secret may take.
    low: i64,
    /// Highest value the secret may take.
    high: i64,
}

impl Bounds {
    /// Standard guessing range: 1 through 100, both ends inclusive.
    pub const STANDARD: Bounds = Bounds { low: 1, high: 100 };

    /// Returns the lowest value the secret may take.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the highest value the secret may take.
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Checks whether a secret lies within the bounds.
    pub fn contains(&self, secret: Secret) -> bool {
        (self.low..=self.high).contains(&secret.value())
    }

    /// Draws a secret uniformly from the bounds.
    #[instrument(skip(rng))]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Secret {
        Secret::new(rng.gen_range(self.low..=self.high))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The value the player must find.
///
/// A secret is drawn once when a session starts and never changes for
/// the lifetime of that session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret(i64);

impl Secret {
    /// Creates a secret with the given value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the secret value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Classification of a guess against the secret.
///
/// Exactly one variant applies to any guess: `TooSmall` iff the guess is
/// below the secret, `TooBig` iff above, `Win` iff equal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Feedback {
    /// The guess is below the secret.
    #[strum(serialize = "Too small!")]
    TooSmall,
    /// The guess is above the secret.
    #[strum(serialize = "Too big!")]
    TooBig,
    /// The guess equals the secret.
    #[strum(serialize = "You win!")]
    Win,
}

impl Feedback {
    /// Returns true if this feedback ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Feedback::Win)
    }
}

/// Current status of a guessing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Session is accepting guesses.
    InProgress,
    /// The secret was guessed; the session is over.
    Won,
}
