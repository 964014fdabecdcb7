//! Error types for documentation graph construction.
//!
//! Only a fatal construction error (unreadable input, or input that is not
//! the expected JSON shape) ever propagates. Dangling references are logged
//! and dropped during the build, and query misses are represented as
//! sentinel values or `None`, never as errors.

use thiserror::Error;

/// Errors that can occur while building the documentation graph.
#[derive(Debug, Error)]
pub enum DocError {
    /// IO error while reading the documentation dump.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input exists but is not parseable as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DocResult<T> = Result<T, DocError>;
