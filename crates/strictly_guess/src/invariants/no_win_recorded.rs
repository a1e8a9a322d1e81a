//! Monotone status invariant: an in-progress session has no recorded win.

use super::Invariant;
use crate::typestate::SessionInProgress;
use crate::types::Feedback;

/// Invariant: An in-progress session's history contains no `Win`.
///
/// A winning guess transitions the session to `SessionWon` immediately,
/// so a `Win` record inside an in-progress history would mean the
/// session kept running past its terminal state.
pub struct NoWinRecordedInvariant;

impl Invariant<SessionInProgress> for NoWinRecordedInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        session
            .history()
            .iter()
            .all(|record| *record.feedback() != Feedback::Win)
    }

    fn description() -> &'static str {
        "In-progress session has no recorded win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Guess, GuessRecord};
    use crate::typestate::{SessionResult, SessionSetup};
    use crate::types::Secret;

    #[test]
    fn test_fresh_session_holds() {
        let session = SessionSetup::new().start_with_secret(Secret::new(42));
        assert!(NoWinRecordedInvariant::holds(&session));
    }

    #[test]
    fn test_missed_guesses_hold() {
        let guesses = vec![Guess::new(10), Guess::new(75)];

        if let SessionResult::InProgress(session) =
            crate::typestate::SessionInProgress::replay(Secret::new(42), &guesses)
        {
            assert!(NoWinRecordedInvariant::holds(&session));
        } else {
            panic!("Expected in-progress session");
        }
    }

    #[test]
    fn test_winning_guess_leaves_no_in_progress_state() {
        let guesses = vec![Guess::new(10), Guess::new(42)];

        match crate::typestate::SessionInProgress::replay(Secret::new(42), &guesses) {
            SessionResult::Won(session) => {
                assert_eq!(session.attempts(), 2);
            }
            SessionResult::InProgress(_) => panic!("Expected won session"),
        }
    }

    #[test]
    fn test_corrupted_history_violates() {
        let mut session = SessionSetup::new().start_with_secret(Secret::new(42));

        // A win record on an in-progress session is a contradiction
        session
            .history
            .push(GuessRecord::new(Guess::new(42), Feedback::Win));

        assert!(!NoWinRecordedInvariant::holds(&session));
    }
}
