//! Room code generator and validator.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomcode -- generate --count 3
//! cargo run --bin roomcode -- validate A1B2C3
//! ```

use std::process::ExitCode;

use clap::Parser;
use roomcode_cli::{Cli, run};
use roomcode_shared::setup_logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
