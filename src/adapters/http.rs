//! HTTP location source
//!
//! Fetches candidate locations from a JSON API. The endpoint answers a
//! plain `GET` with an array of records:
//!
//! ```json
//! [{"id": 1, "latitude": 48.86, "longitude": 2.33, "name": "...", "address": "..."}]
//! ```
//!
//! # Example
//! ```rust,ignore
//! let source = HttpSource::new(SourceConfig::new("http://localhost:3000"))?;
//! let candidates = source.fetch()?;
//! ```

use std::time::Instant;

use tracing::{info, warn};

use crate::core::config::SourceConfig;
use crate::core::Candidate;
use crate::ports::{CandidateSource, SourceError, SourceResult};

/// Blocking client for a location API
pub struct HttpSource {
    config: SourceConfig,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Create a client for the configured endpoint
    pub fn new(config: SourceConfig) -> SourceResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl CandidateSource for HttpSource {
    fn fetch(&self) -> SourceResult<Vec<Candidate>> {
        let url = self.config.url();
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "location request rejected");
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        let candidates = decode_locations(&body)?;

        info!(
            %url,
            count = candidates.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched locations"
        );

        Ok(candidates)
    }

    fn describe(&self) -> String {
        self.config.url()
    }
}

/// Decode a JSON array of location records
pub fn decode_locations(body: &[u8]) -> SourceResult<Vec<Candidate>> {
    Ok(serde_json::from_slice(body)?)
}
