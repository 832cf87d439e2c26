//! # Source Port
//!
//! Trait for obtaining the candidate list.
//!
//! Implemented by source adapters (HTTP API, JSON file).

use crate::core::Candidate;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching candidates
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed location records: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait for fetching candidate locations
///
/// Each call returns a fresh list; sources keep no per-request state.
pub trait CandidateSource: Send + Sync {
    /// Fetch every candidate the source knows about
    fn fetch(&self) -> SourceResult<Vec<Candidate>>;

    /// Human-readable origin of the data, for logs
    fn describe(&self) -> String;
}
