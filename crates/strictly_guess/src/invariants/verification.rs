//! Formal verification of classification rules using Kani model checker.
//!
//! These proof harnesses mathematically verify the guarantees for ALL
//! possible guess/secret pairs.

#[cfg(kani)]
mod proofs {
    use crate::rules::classify;
    use crate::types::{Feedback, Secret};
    use crate::Guess;

    /// Verify classification is exhaustive and mutually exclusive.
    ///
    /// Proves: for any guess and secret, exactly one feedback fires, and
    /// it agrees with the integer ordering.
    #[kani::proof]
    fn verify_classification_exhaustive() {
        let guess: i64 = kani::any();
        let secret: i64 = kani::any();

        match classify(Guess::new(guess), Secret::new(secret)) {
            Feedback::TooSmall => assert!(guess < secret),
            Feedback::TooBig => assert!(guess > secret),
            Feedback::Win => assert!(guess == secret),
        }
    }

    /// Verify a win is reported exactly when the guess equals the secret.
    #[kani::proof]
    fn verify_win_iff_equal() {
        let guess: i64 = kani::any();
        let secret: i64 = kani::any();

        let feedback = classify(Guess::new(guess), Secret::new(secret));
        assert_eq!(feedback == Feedback::Win, guess == secret);
    }
}
