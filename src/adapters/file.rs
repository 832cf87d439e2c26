//! JSON file location source
//!
//! Reads the same record array the HTTP API serves, from disk. Handy for
//! offline use and fixtures.

use std::path::PathBuf;

use tracing::info;

use super::http::decode_locations;
use crate::core::Candidate;
use crate::ports::{CandidateSource, SourceError, SourceResult};

/// Candidate list stored as a JSON file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for JsonFileSource {
    fn fetch(&self) -> SourceResult<Vec<Candidate>> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let candidates = decode_locations(&bytes)?;

        info!(path = %self.path.display(), count = candidates.len(), "loaded locations");
        Ok(candidates)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
