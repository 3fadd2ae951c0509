//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to every
/// target. Output goes to stderr so stdout stays free for command results.
///
/// Use RUST_LOG to configure, e.g.:
/// RUST_LOG=debug,roomcode_core=trace
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    // A subscriber may already be installed (e.g. when called twice in tests).
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::debug!(bin = bin_name, "logger initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: setup_logger を 2 回呼び出してもパニックしない
        // when (操作):
        setup_logger("roomcode-test", "debug");
        setup_logger("roomcode-test", "info");

        // then (期待する結果):
        tracing::info!("still alive");
    }
}
