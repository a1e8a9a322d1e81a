//! End-to-end tests for the console loop over in-memory streams.

use std::io::Cursor;
use strictly_guess::{Feedback, Secret, SessionSetup};
use strictly_guess_cli::{Console, ParsePolicy};

fn transcript_lines(secret: i64, input: &str, policy: ParsePolicy) -> (bool, Vec<String>) {
    let session = SessionSetup::new().start_with_secret(Secret::new(secret));
    let mut output = Vec::new();
    let result = Console::new(Cursor::new(input.to_string()), &mut output, policy).run(session);

    let transcript = String::from_utf8(output).expect("utf8 transcript");
    let lines = transcript.lines().map(str::to_string).collect();
    (result.is_ok(), lines)
}

#[test]
fn test_full_session_transcript_order() {
    let (won, lines) = transcript_lines(42, "10\n75\n42\n", ParsePolicy::Reprompt);

    assert!(won);
    assert_eq!(
        lines,
        vec![
            "Guess the number!",
            "Please input your guess: You guessed: 10",
            "Too small!",
            "Please input your guess: You guessed: 75",
            "Too big!",
            "Please input your guess: You guessed: 42",
            "You win!",
        ]
    );
}

#[test]
fn test_session_reports_win_exactly_once() {
    let (won, lines) = transcript_lines(1, "1\n", ParsePolicy::Reprompt);

    assert!(won);
    let wins = lines
        .iter()
        .filter(|line| line.contains(&Feedback::Win.to_string()))
        .count();
    assert_eq!(wins, 1);
}

#[test]
fn test_no_reads_or_writes_after_win() {
    // Input holds more lines past the winning guess; none are consumed
    let (won, lines) = transcript_lines(42, "42\n99\n100\n", ParsePolicy::Reprompt);

    assert!(won);
    assert!(!lines.iter().any(|line| line.contains("99")));
    assert!(!lines.iter().any(|line| line.contains("100")));
    assert_eq!(lines.last().map(String::as_str), Some("You win!"));
}

#[test]
fn test_strict_mode_fails_fast_on_malformed_input() {
    let (won, lines) = transcript_lines(42, "abc\n42\n", ParsePolicy::Fatal);

    assert!(!won);
    // The valid guess after the malformed line is never reached
    assert!(!lines.iter().any(|line| line.contains("You guessed")));
}

#[test]
fn test_lenient_mode_recovers_from_malformed_input() {
    let (won, lines) = transcript_lines(42, "not a number\n42\n", ParsePolicy::Reprompt);

    assert!(won);
    assert!(lines.iter().any(|line| line == "Please type a number!"));
    assert_eq!(lines.last().map(String::as_str), Some("You win!"));
}
