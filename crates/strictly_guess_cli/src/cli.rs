//! Command-line interface for strictly_guess.

use clap::Parser;

/// Strictly Guess - interactive number-guessing game
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Guess the secret number between 1 and 100", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the secret-number generator (system entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exit with an error on malformed input instead of re-prompting
    #[arg(long)]
    pub strict: bool,
}
