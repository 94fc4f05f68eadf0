//! Error types for the fallible boundaries of the engine.
//!
//! Board operations clamp instead of failing. Errors only come from
//! converting untrusted input: raw player counts and configuration.

use thiserror::Error;

/// Errors produced when building a board from external input.
#[derive(Error, Debug)]
pub enum CounterError {
    #[error("unsupported player count: {0} (expected 2-6)")]
    InvalidPlayerCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type CounterResult<T> = Result<T, CounterError>;
