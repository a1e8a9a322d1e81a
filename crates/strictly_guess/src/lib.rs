//! Strictly Guess library - type-safe number-guessing game logic
//!
//! This library provides the pure logic for a guess-the-number session:
//! a secret drawn from a bounded range, a classification rule, and a
//! typestate session that accepts guesses until the first win.
//!
//! # Architecture
//!
//! - **Types**: bounds, secret, feedback, session status
//! - **Actions**: first-class guesses with parsing and history records
//! - **Rules**: pure classification of a guess against the secret
//! - **Typestate**: `SessionSetup → SessionInProgress → SessionWon`
//! - **Invariants**: first-class session guarantees, checked in debug
//!   builds and testable independently
//!
//! # Example
//!
//! ```
//! use strictly_guess::{Guess, Secret, SessionResult, SessionSetup};
//!
//! let session = SessionSetup::new().start_with_secret(Secret::new(42));
//!
//! match session.guess(Guess::new(10)) {
//!     SessionResult::InProgress(session) => {
//!         assert_eq!(session.attempts(), 1);
//!     }
//!     SessionResult::Won(_) => unreachable!("10 is not the secret"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod rules;
mod types;
mod typestate;

// First-class invariants (public for external verification and tests)
pub mod invariants;

// Crate-level exports - Actions
pub use action::{Guess, GuessError, GuessRecord};

// Crate-level exports - Rules
pub use rules::classify;

// Crate-level exports - Core types
pub use types::{Bounds, Feedback, Secret, SessionStatus};

// Crate-level exports - Session phases
pub use typestate::{SessionInProgress, SessionResult, SessionSetup, SessionWon};
