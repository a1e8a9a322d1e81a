//! Feedback consistency invariant: recorded feedback matches the rules.

use super::Invariant;
use crate::rules;
use crate::typestate::SessionInProgress;

/// Invariant: Every recorded feedback equals the classification of its
/// guess against the secret.
///
/// This is verified by replaying the history through the rules and
/// comparing each record.
pub struct FeedbackConsistentInvariant;

impl Invariant<SessionInProgress> for FeedbackConsistentInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        session
            .history()
            .iter()
            .all(|record| rules::classify(*record.guess(), session.secret) == *record.feedback())
    }

    fn description() -> &'static str {
        "Recorded feedback matches classification against the secret"
    }
}
