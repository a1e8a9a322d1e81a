//! Classification rules for the guessing game.
//!
//! This module contains the pure function that evaluates a guess against
//! the secret. Rules are separated from session storage so they can be
//! tested and verified independently.

use crate::action::Guess;
use crate::types::{Feedback, Secret};
use std::cmp::Ordering;
use tracing::instrument;

/// Classifies a guess against the secret.
///
/// Exactly one feedback applies to any guess:
/// - [`Feedback::TooSmall`] iff the guess is below the secret
/// - [`Feedback::TooBig`] iff the guess is above the secret
/// - [`Feedback::Win`] iff the guess equals the secret
#[instrument]
pub fn classify(guess: Guess, secret: Secret) -> Feedback {
    match guess.value().cmp(&secret.value()) {
        Ordering::Less => Feedback::TooSmall,
        Ordering::Greater => Feedback::TooBig,
        Ordering::Equal => Feedback::Win,
    }
}
