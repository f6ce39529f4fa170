//! Crate-level error types.

use thiserror::Error;

/// Errors surfaced by the coverage analysis pipeline
///
/// The tool is offline and exploratory: every variant is fatal and
/// propagates to the top level, there is no retry or partial-result
/// recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// Unusable configuration: unknown dataset family, unreadable or
    /// unparsable config file, missing required argument
    #[error("configuration error: {0}")]
    Config(String),

    /// Unusable persisted input: missing/malformed index files,
    /// out-of-range sample indices, empty or mismatched label arrays
    #[error("data error: {0}")]
    Data(String),

    /// Mathematically undefined request, e.g. a coverage denominator of
    /// zero distinct classes
    #[error("domain error: {0}")]
    Domain(String),

    /// IO failure outside the cases above
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for coverage analysis operations
pub type Result<T> = std::result::Result<T, Error>;
