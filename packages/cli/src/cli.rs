//! Argument parsing and command dispatch.

use std::io::Write;

use clap::{Parser, Subcommand};
use roomcode_core::{ROOM_ID_LENGTH, RoomIdFactory, generate, validate};

use crate::{
    dto::{GeneratedDto, ValidationDto},
    error::CliError,
};

/// Longest code `generate` will produce
pub const MAX_LENGTH: usize = 1024;

/// Most codes a single `generate` call will produce
pub const MAX_COUNT: usize = 10_000;

/// Generate and validate short room identifiers
#[derive(Debug, Parser)]
#[command(name = "roomcode", version, about)]
pub struct Cli {
    /// Default log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print random room codes
    Generate {
        /// Number of characters per code
        #[arg(short, long, default_value_t = ROOM_ID_LENGTH)]
        length: usize,

        /// Number of codes to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print a JSON array instead of one code per line
        #[arg(long)]
        json: bool,
    },
    /// Check whether candidates are well-formed room codes
    Validate {
        /// Candidates to check, taken verbatim (leading hyphens included)
        #[arg(required = true, allow_hyphen_values = true)]
        candidates: Vec<String>,

        /// Print a JSON array instead of one result per line
        #[arg(long)]
        json: bool,
    },
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// At least one validated candidate was rejected
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Invalid => 1,
        }
    }
}

/// Execute `cli`, writing results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Generate {
            length,
            count,
            json,
        } => run_generate(length, count, json, out),
        Command::Validate { candidates, json } => run_validate(&candidates, json, out),
    }
}

fn run_generate<W: Write>(
    length: usize,
    count: usize,
    json: bool,
    out: &mut W,
) -> Result<Outcome, CliError> {
    if count == 0 || count > MAX_COUNT {
        return Err(CliError::InvalidCount {
            max: MAX_COUNT,
            actual: count,
        });
    }
    if length > MAX_LENGTH {
        return Err(CliError::InvalidLength {
            max: MAX_LENGTH,
            actual: length,
        });
    }

    let codes: Vec<String> = if length == ROOM_ID_LENGTH {
        RoomIdFactory::generate_many(count)
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        (0..count).map(|_| generate(length)).collect()
    };
    tracing::info!(length, count, "generated room codes");

    if json {
        let dtos: Vec<GeneratedDto> = codes
            .into_iter()
            .map(|room_id| GeneratedDto { room_id, length })
            .collect();
        serde_json::to_writer(&mut *out, &dtos)?;
        writeln!(out)?;
    } else {
        for code in codes {
            writeln!(out, "{code}")?;
        }
    }
    Ok(Outcome::Success)
}

fn run_validate<W: Write>(
    candidates: &[String],
    json: bool,
    out: &mut W,
) -> Result<Outcome, CliError> {
    let results: Vec<ValidationDto> = candidates
        .iter()
        .map(|candidate| ValidationDto {
            candidate: candidate.clone(),
            valid: validate(candidate),
        })
        .collect();

    let rejected = results.iter().filter(|r| !r.valid).count();
    tracing::info!(total = results.len(), rejected, "validated candidates");

    if json {
        serde_json::to_writer(&mut *out, &results)?;
        writeln!(out)?;
    } else {
        for r in &results {
            let verdict = if r.valid { "valid" } else { "invalid" };
            writeln!(out, "{}\t{}", r.candidate, verdict)?;
        }
    }

    if rejected == 0 {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Invalid)
    }
}
