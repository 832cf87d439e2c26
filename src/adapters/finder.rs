//! # Scan Finder Adapter
//!
//! Brute force nearest candidate search.
//! Measures the origin against ALL candidates - O(n) per query.
//!
//! Good for:
//! - The candidate lists a location API returns (tens to thousands)
//! - When exact results are required
//!
//! Not good for:
//! - Millions of points queried repeatedly (build a spatial index instead)

use tracing::debug;

use crate::core::config::FinderConfig;
use crate::core::{Candidate, Coordinate, RankedCandidate};
use crate::ports::{NearError, NearResult, Nearest, NearestResult};

/// Single-pass finder - compares every candidate
#[derive(Clone, Debug, Default)]
pub struct ScanFinder {
    config: FinderConfig,
}

impl ScanFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Haversine distance, no radius limit
    pub fn haversine() -> Self {
        Self::new(FinderConfig::default())
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    fn check_origin(origin: &Coordinate) -> NearResult<()> {
        origin.validate().map_err(NearError::invalid_origin)
    }

    fn check_radius(radius_km: f64) -> NearResult<f64> {
        if radius_km.is_finite() && radius_km >= 0.0 {
            Ok(radius_km)
        } else {
            Err(NearError::InvalidRadius(radius_km))
        }
    }

    /// The configured radius, validated
    fn radius(&self) -> NearResult<Option<f64>> {
        self.config.radius_km.map(Self::check_radius).transpose()
    }

    /// Distance from origin to one candidate, validating the candidate first
    fn measure_one(&self, origin: &Coordinate, candidate: &Candidate) -> NearResult<RankedCandidate> {
        candidate
            .coordinate
            .validate()
            .map_err(|e| NearError::invalid_candidate(&candidate.id, e))?;

        let distance_km = self
            .config
            .distance
            .distance_km(origin, &candidate.coordinate);

        Ok(RankedCandidate::new(candidate.clone(), distance_km))
    }

    /// Annotate every candidate, in input order
    fn measure_all(&self, origin: &Coordinate, candidates: &[Candidate]) -> NearResult<Vec<RankedCandidate>> {
        Self::check_origin(origin)?;
        candidates
            .iter()
            .map(|candidate| self.measure_one(origin, candidate))
            .collect()
    }
}

impl Nearest for ScanFinder {
    fn find_nearest(&self, origin: &Coordinate, candidates: &[Candidate]) -> NearResult<NearestResult> {
        Self::check_origin(origin)?;
        let radius = self.radius()?;

        let mut annotated = Vec::with_capacity(candidates.len());
        let mut best: Option<(usize, f64)> = None;

        for candidate in candidates {
            let ranked = self.measure_one(origin, candidate)?;

            let in_range = radius.map_or(true, |r| ranked.distance_km <= r);
            if !in_range {
                continue;
            }

            // Strict comparison: the first candidate at the minimum keeps it
            if best.map_or(true, |(_, min)| ranked.distance_km < min) {
                best = Some((annotated.len(), ranked.distance_km));
            }
            annotated.push(ranked);
        }

        let nearest_id = best.map(|(pos, _)| annotated[pos].id().clone());

        debug!(
            origin = %origin,
            candidates = candidates.len(),
            kept = annotated.len(),
            nearest = ?nearest_id,
            distance = self.config.distance.name(),
            "scanned candidates"
        );

        Ok(NearestResult {
            nearest_id,
            candidates: annotated,
        })
    }

    fn rank(&self, origin: &Coordinate, candidates: &[Candidate], k: usize) -> NearResult<Vec<RankedCandidate>> {
        let radius = self.radius()?;
        let mut results = self.measure_all(origin, candidates)?;

        if let Some(radius) = radius {
            results.retain(|r| r.distance_km <= radius);
        }

        // Stable, so equal distances keep input order
        results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        results.truncate(k);

        Ok(results)
    }

    fn within(&self, origin: &Coordinate, candidates: &[Candidate], radius_km: f64) -> NearResult<Vec<RankedCandidate>> {
        let radius_km = Self::check_radius(radius_km)?;
        let mut results = self.measure_all(origin, candidates)?;
        results.retain(|r| r.distance_km <= radius_km);
        Ok(results)
    }
}
