//! Strictly Guess - interactive number-guessing console game.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_guess::{SessionInProgress, SessionSetup};
use strictly_guess_cli::{Cli, Console, ParsePolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is the game transcript
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session = start_session(cli.seed);
    let policy = if cli.strict {
        ParsePolicy::Fatal
    } else {
        ParsePolicy::Reprompt
    };

    let stdin = std::io::stdin();
    let won = Console::new(stdin.lock(), std::io::stdout(), policy).run(session)?;

    info!(
        secret = won.secret().value(),
        attempts = won.attempts(),
        "Game over"
    );

    Ok(())
}

/// Starts a session, seeding the secret generator when asked to.
fn start_session(seed: Option<u64>) -> SessionInProgress {
    match seed {
        Some(seed) => {
            info!(seed, "Seeding secret generator");
            SessionSetup::new().start(&mut StdRng::seed_from_u64(seed))
        }
        None => SessionSetup::new().start(&mut rand::thread_rng()),
    }
}
