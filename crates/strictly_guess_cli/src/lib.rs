//! Strictly Guess CLI library - console frontend for the guessing game
//!
//! This library wires the pure session logic from `strictly_guess` to a
//! line-oriented console: prompts and feedback on the output stream, one
//! blocking guess per line on the input stream.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;

// Crate-level exports - CLI arguments
pub use cli::Cli;

// Crate-level exports - Console loop
pub use console::{Console, ParsePolicy};
