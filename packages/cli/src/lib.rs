//! Command-line front end for room identifiers.
//!
//! Exposes generation and validation from `roomcode-core` to shell scripts.

pub mod cli;
pub mod dto;
pub mod error;

pub use cli::{Cli, Command, MAX_COUNT, MAX_LENGTH, Outcome, run};
pub use error::CliError;
