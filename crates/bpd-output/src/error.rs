//! Writer failures.
//!
//! The DOT and JSON Lines writers fail only on their sink; the CSV writer
//! also surfaces `csv` errors, including failing to create its two files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// The DOT or JSON sink rejected a write or flush.
    #[error("graph sink: {0}")]
    Io(#[from] std::io::Error),

    /// `nodes.csv` / `edges.csv` could not be created or written.
    #[error("graph CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A `GraphModel` failed to serialize.
    #[error("graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
