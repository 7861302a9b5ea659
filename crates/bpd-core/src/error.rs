//! Snapshot-level error type.
//!
//! Decoding a packed field can never fail; the only fallible operations in
//! this crate are reading and parsing snapshot files.

use thiserror::Error;

/// Errors produced by `bpd-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `bpd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
