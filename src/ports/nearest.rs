//! # Nearest Port
//!
//! Trait for measuring candidates against an origin and picking the closest.
//!
//! Implemented by finder adapters (`ScanFinder`).

use serde::Serialize;

use crate::core::{Candidate, CandidateId, Coordinate, CoordinateError, RankedCandidate};

/// Result type for nearest operations
pub type NearResult<T> = Result<T, NearError>;

/// Which input carried a bad coordinate
#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
    Origin,
    Candidate(CandidateId),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Origin => f.write_str("origin"),
            Subject::Candidate(id) => write!(f, "candidate {id}"),
        }
    }
}

/// Errors that can occur during nearest operations
///
/// Any error aborts the whole call; no partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NearError {
    #[error("invalid coordinate for {subject}: {source}")]
    InvalidCoordinate {
        subject: Subject,
        #[source]
        source: CoordinateError,
    },

    #[error("search radius {0} km must be a finite, non-negative number")]
    InvalidRadius(f64),
}

impl NearError {
    pub fn invalid_origin(source: CoordinateError) -> Self {
        NearError::InvalidCoordinate {
            subject: Subject::Origin,
            source,
        }
    }

    pub fn invalid_candidate(id: &CandidateId, source: CoordinateError) -> Self {
        NearError::InvalidCoordinate {
            subject: Subject::Candidate(id.clone()),
            source,
        }
    }
}

/// Every candidate annotated with its distance, plus which one is closest
///
/// The nearest candidate is named by its identifier, never by position, so
/// the answer stays correct if a consumer reorders `candidates`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NearestResult {
    /// Identifier of the closest candidate, `None` when there were none
    pub nearest_id: Option<CandidateId>,

    /// Candidates with distances, in input order
    pub candidates: Vec<RankedCandidate>,
}

impl NearestResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The closest candidate, if any
    pub fn nearest(&self) -> Option<&RankedCandidate> {
        let id = self.nearest_id.as_ref()?;
        self.candidates
            .iter()
            .filter(|c| c.id() == id)
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
    }

    /// Whether `id` identifies the closest candidate
    pub fn is_nearest(&self, id: &CandidateId) -> bool {
        self.nearest_id.as_ref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Trait for finding the candidate closest to an origin
///
/// Implementations are stateless with respect to queries: each call works
/// only on its arguments and returns a fresh value.
pub trait Nearest: Send + Sync {
    /// Annotate every candidate with its distance and name the closest
    ///
    /// Ties go to the candidate that appears first. An empty slice yields
    /// an empty result with no nearest id.
    fn find_nearest(&self, origin: &Coordinate, candidates: &[Candidate]) -> NearResult<NearestResult>;

    /// The `k` closest candidates, ascending by distance
    ///
    /// Equal distances keep input order.
    fn rank(&self, origin: &Coordinate, candidates: &[Candidate], k: usize) -> NearResult<Vec<RankedCandidate>>;

    /// All candidates at most `radius_km` away, in input order
    fn within(&self, origin: &Coordinate, candidates: &[Candidate], radius_km: f64) -> NearResult<Vec<RankedCandidate>>;
}
