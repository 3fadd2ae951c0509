//! Shared utilities for roomcode binaries.

pub mod logger;

pub use logger::setup_logger;
