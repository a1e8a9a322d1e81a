//! First-class invariants for guessing sessions.
//!
//! Invariants are logical properties that must hold throughout session
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

#[cfg(kani)]
mod verification;

use crate::typestate::SessionInProgress;
use tracing::instrument;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod feedback_consistent;
pub mod no_win_recorded;
pub mod secret_in_range;

pub use feedback_consistent::FeedbackConsistentInvariant;
pub use no_win_recorded::NoWinRecordedInvariant;
pub use secret_in_range::SecretInRangeInvariant;

/// All guessing-session invariants as a composable set.
pub type SessionInvariants = (
    SecretInRangeInvariant,
    FeedbackConsistentInvariant,
    NoWinRecordedInvariant,
);

/// Asserts that all session invariants hold (panic on violation in debug builds).
#[instrument(skip(session))]
pub fn assert_invariants(session: &SessionInProgress) {
    debug_assert!(
        SecretInRangeInvariant::holds(session),
        "Secret range violated"
    );
    debug_assert!(
        FeedbackConsistentInvariant::holds(session),
        "Feedback consistency violated"
    );
    debug_assert!(
        NoWinRecordedInvariant::holds(session),
        "Win recorded on in-progress session"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Guess, GuessRecord};
    use crate::typestate::{SessionResult, SessionSetup};
    use crate::types::{Feedback, Secret};

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = SessionSetup::new().start_with_secret(Secret::new(42));
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let guesses = vec![Guess::new(10), Guess::new(75), Guess::new(30)];

        if let SessionResult::InProgress(session) =
            crate::typestate::SessionInProgress::replay(Secret::new(42), &guesses)
        {
            assert!(SessionInvariants::check_all(&session).is_ok());
        } else {
            panic!("Expected in-progress session");
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = SessionSetup::new().start_with_secret(Secret::new(42));

        // Corrupt the history with feedback that contradicts the secret
        session
            .history
            .push(GuessRecord::new(Guess::new(10), Feedback::TooBig));

        let result = SessionInvariants::check_all(&session);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = SessionSetup::new().start_with_secret(Secret::new(42));

        type TwoInvariants = (SecretInRangeInvariant, NoWinRecordedInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
