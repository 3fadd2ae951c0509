//! CLI error definitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("count must be between 1 and {max} (got {actual})")]
    InvalidCount { max: usize, actual: usize },

    #[error("length must be at most {max} (got {actual})")]
    InvalidLength { max: usize, actual: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
