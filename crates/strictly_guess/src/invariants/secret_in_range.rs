//! Secret range invariant: the secret lies within the session bounds.

use super::Invariant;
use crate::typestate::SessionInProgress;

/// Invariant: The secret lies within the session bounds.
///
/// The secret is drawn from the bounds at session start and never
/// mutated, so this must hold for every reachable session state.
pub struct SecretInRangeInvariant;

impl Invariant<SessionInProgress> for SecretInRangeInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        session.bounds.contains(session.secret)
    }

    fn description() -> &'static str {
        "Secret lies within the session bounds"
    }
}
