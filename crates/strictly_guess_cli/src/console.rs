//! Interactive console loop for the guessing game.
//!
//! The loop is generic over its reader and writer so the full
//! prompt/guess/feedback cycle can be driven from in-memory streams in
//! tests. In production it runs over locked stdin and stdout.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_guess::{Guess, SessionInProgress, SessionResult, SessionWon};
use tracing::{debug, info, instrument, warn};

/// Policy for input lines that fail to parse as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Propagate the parse error; the process exits with a failure.
    Fatal,
    /// Report the problem to the player and read another line.
    Reprompt,
}

/// Console frontend driving one session to its win.
///
/// Each iteration prompts, blocks on one line of input, parses it as a
/// guess, echoes it, and answers with the classification. The only
/// normal exit is a winning guess; end-of-input before a win is an
/// error.
pub struct Console<R, W> {
    input: R,
    output: W,
    policy: ParsePolicy,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W, policy: ParsePolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    /// Runs the guess/feedback loop until the secret is guessed.
    ///
    /// # Errors
    ///
    /// Fails if the input stream ends before a win, if a line cannot be
    /// parsed under [`ParsePolicy::Fatal`], or if writing to the output
    /// stream fails.
    #[instrument(skip_all)]
    pub fn run(mut self, session: SessionInProgress) -> Result<SessionWon> {
        writeln!(self.output, "Guess the number!")?;

        let mut session = session;
        loop {
            let guess = match self.read_guess()? {
                Some(guess) => guess,
                None => continue,
            };

            writeln!(self.output, "You guessed: {guess}")?;

            let result = session.guess(guess);
            writeln!(self.output, "{}", result.feedback())?;

            match result {
                SessionResult::InProgress(next) => {
                    debug!(attempts = next.attempts(), "Session continues");
                    session = next;
                }
                SessionResult::Won(won) => {
                    info!(attempts = won.attempts(), "Session won");
                    return Ok(won);
                }
            }
        }
    }

    /// Prompts and reads one guess.
    ///
    /// Returns `Ok(None)` when a malformed line was discarded under
    /// [`ParsePolicy::Reprompt`].
    fn read_guess(&mut self) -> Result<Option<Guess>> {
        write!(self.output, "Please input your guess: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read a guess")?;

        if bytes == 0 {
            bail!("input ended before the secret was guessed");
        }

        match line.parse::<Guess>() {
            Ok(guess) => Ok(Some(guess)),
            Err(err) => match self.policy {
                ParsePolicy::Fatal => Err(err).context("could not read a guess"),
                ParsePolicy::Reprompt => {
                    warn!(input = line.trim(), "Discarding malformed guess");
                    writeln!(self.output, "Please type a number!")?;
                    Ok(None)
                }
            },
        }
    }
}
