//! Phase-specific typestate structs for a guessing session.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `SessionWon` ALWAYS
//! knows its secret and winning history, and has no `guess` method,
//! so a won session can never accept further guesses.

use crate::action::{Guess, GuessRecord};
use crate::invariants::assert_invariants;
use crate::rules;
use crate::types::{Bounds, Secret, SessionStatus};
use rand::Rng;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Session in setup phase - bounds fixed, secret not yet drawn.
#[derive(Debug, Clone)]
pub struct SessionSetup {
    bounds: Bounds,
}

impl SessionSetup {
    /// Creates a new session over the standard bounds.
    #[instrument]
    pub fn new() -> Self {
        Self {
            bounds: Bounds::STANDARD,
        }
    }

    /// Returns the session bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Starts the session, drawing the secret from the given generator
    /// (consumes setup, returns in-progress).
    ///
    /// The generator is injected so callers control the randomness
    /// source; any [`Rng`] works, seeded or not.
    #[instrument(skip(self, rng))]
    pub fn start<R: Rng + ?Sized>(self, rng: &mut R) -> SessionInProgress {
        let secret = self.bounds.sample(rng);
        debug!("Secret drawn");
        SessionInProgress {
            bounds: self.bounds,
            secret,
            history: Vec::new(),
        }
    }

    /// Starts the session with a known secret.
    ///
    /// Used by tests and replays that need a deterministic session.
    /// The secret must lie within the session bounds.
    #[instrument(skip(self))]
    pub fn start_with_secret(self, secret: Secret) -> SessionInProgress {
        debug_assert!(
            self.bounds.contains(secret),
            "Secret outside session bounds"
        );
        SessionInProgress {
            bounds: self.bounds,
            secret,
            history: Vec::new(),
        }
    }
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Session in progress - can accept guesses.
///
/// Invariants enforced by type:
/// - The secret is fixed (no mutator exists)
/// - No terminal data yet (the winning record lives in `SessionWon`)
#[derive(Debug, Clone)]
pub struct SessionInProgress {
    pub(crate) bounds: Bounds,
    pub(crate) secret: Secret,
    pub(crate) history: Vec<GuessRecord>,
}

impl SessionInProgress {
    /// Applies a guess, consuming self and transitioning to the next state.
    ///
    /// Returns either a new `InProgress` or a terminal `Won` state.
    /// Every `i64` is a legal guess, so unlike a board game move this
    /// transition cannot fail; the guess is classified, recorded, and
    /// answered.
    #[instrument(skip(self), fields(guess = %guess))]
    pub fn guess(mut self, guess: Guess) -> SessionResult {
        let feedback = rules::classify(guess, self.secret);
        self.history.push(GuessRecord::new(guess, feedback));

        if feedback.is_terminal() {
            info!(attempts = self.history.len(), "Secret guessed");
            return SessionResult::Won(SessionWon {
                bounds: self.bounds,
                secret: self.secret,
                history: self.history,
            });
        }

        debug!(?feedback, "Guess missed");
        assert_invariants(&self);

        SessionResult::InProgress(self)
    }

    /// Returns the session bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns the guess history.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Returns the number of guesses made so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        SessionStatus::InProgress
    }

    /// Replays guesses against a known secret from a fresh session.
    ///
    /// Processing stops at the first winning guess; later guesses in the
    /// list are never classified.
    #[instrument]
    pub fn replay(secret: Secret, guesses: &[Guess]) -> SessionResult {
        let mut session = SessionSetup::new().start_with_secret(secret);

        for guess in guesses {
            match session.guess(*guess) {
                SessionResult::InProgress(next) => session = next,
                won @ SessionResult::Won(_) => return won,
            }
        }

        SessionResult::InProgress(session)
    }
}

// ─────────────────────────────────────────────────────────────
//  Won Phase
// ─────────────────────────────────────────────────────────────

/// Session won - the secret was guessed.
///
/// The secret and the full history are ALWAYS present. There is no
/// `guess` method, so the `InProgress → Won` transition is final by
/// construction.
#[derive(Debug, Clone)]
pub struct SessionWon {
    bounds: Bounds,
    secret: Secret,
    history: Vec<GuessRecord>,
}

impl SessionWon {
    /// Returns the secret that was guessed.
    ///
    /// Only a won session reveals its secret.
    pub fn secret(&self) -> Secret {
        self.secret
    }

    /// Returns the session bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns the guess history, ending with the winning record.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Returns the number of guesses it took to win.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        SessionStatus::Won
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a guess.
#[derive(Debug)]
pub enum SessionResult {
    /// Session continues.
    InProgress(SessionInProgress),
    /// Session won.
    Won(SessionWon),
}

impl SessionResult {
    /// Returns the feedback earned by the guess that produced this state.
    pub fn feedback(&self) -> crate::types::Feedback {
        self.history()
            .last()
            .map(|record| *record.feedback())
            .expect("a session transition always records its guess")
    }

    /// Returns the guess history of the underlying session.
    pub fn history(&self) -> &[GuessRecord] {
        match self {
            SessionResult::InProgress(session) => session.history(),
            SessionResult::Won(session) => session.history(),
        }
    }

    /// Returns the status of the underlying session.
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionResult::InProgress(session) => session.status(),
            SessionResult::Won(session) => session.status(),
        }
    }
}
