//! Shared helpers for running the `roomcode` binary in tests.

use std::process::{Command, Output};

/// Run the built `roomcode` binary with `args`.
///
/// `RUST_LOG` is cleared so that log output never depends on the caller's environment.
pub fn run_roomcode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roomcode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run roomcode binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}
