//! JSON output DTOs for the CLI.

use serde::{Deserialize, Serialize};

/// One generated code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDto {
    pub room_id: String,
    pub length: usize,
}

/// Validation result for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationDto {
    pub candidate: String,
    pub valid: bool,
}
