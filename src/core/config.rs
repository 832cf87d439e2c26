//! # Configuration
//!
//! Finder and source configuration. Builder style, every field has a
//! sensible default.

use std::sync::Arc;
use std::time::Duration;

use super::distance::{Distance, Haversine};

/// Path the location API serves its records on
pub const DEFAULT_LOCATIONS_PATH: &str = "/api/locations";

/// How the nearest-point search measures and filters
#[derive(Clone)]
pub struct FinderConfig {
    /// Distance function used for every comparison
    pub distance: Arc<dyn Distance>,

    /// Only consider candidates at most this many kilometres away
    pub radius_km: Option<f64>,
}

impl FinderConfig {
    /// Haversine distance, no radius limit
    pub fn new() -> Self {
        Self {
            distance: Arc::new(Haversine::default()),
            radius_km: None,
        }
    }

    /// Set a custom distance function
    pub fn with_distance<D: Distance + 'static>(mut self, distance: D) -> Self {
        self.distance = Arc::new(distance);
        self
    }

    /// Limit the search to a radius around the origin
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("distance", &self.distance.name())
            .field("radius_km", &self.radius_km)
            .finish()
    }
}

/// Where candidate locations are fetched from
#[derive(Clone, Debug)]
pub struct SourceConfig {
    /// Scheme and host, e.g. `http://localhost:3000`
    pub base_url: String,

    /// Path appended to `base_url`
    pub path: String,

    /// Request timeout
    pub timeout: Duration,
}

impl SourceConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            path: DEFAULT_LOCATIONS_PATH.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the locations endpoint
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
