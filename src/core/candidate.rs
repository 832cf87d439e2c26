//! # Candidate
//!
//! A point of interest eligible for the nearest-distance comparison, and
//! the same candidate once annotated with its distance from an origin.

use serde::{Deserialize, Serialize};

use super::{CandidateId, Coordinate};

/// A point of interest as returned by a location lookup
///
/// Serialized flat, matching the upstream record shape:
/// `{"id", "latitude", "longitude", "name", "address"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,

    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coordinate,
            name: name.into(),
            address: None,
        }
    }

    /// Attach a display address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A candidate annotated with its distance from the origin
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,

    /// Great-circle distance in kilometres, always >= 0
    pub distance_km: f64,
}

impl RankedCandidate {
    pub fn new(candidate: Candidate, distance_km: f64) -> Self {
        Self {
            candidate,
            distance_km,
        }
    }

    pub fn id(&self) -> &CandidateId {
        &self.candidate.id
    }
}
