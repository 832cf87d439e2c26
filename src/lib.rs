//! # Nearest Place
//!
//! Find the point of interest closest to a position.
//!
//! ## Overview
//!
//! Given an origin coordinate and a list of candidate locations (pharmacies,
//! shops, anything with a latitude and longitude), measure the great-circle
//! distance to each and name the closest one.
//!
//! - **Exact**: haversine distance on a 6371 km sphere
//! - **Stable**: the nearest candidate is reported by identifier, ties go to
//!   the first candidate in input order
//! - **Pure**: no shared state, safe to call from any number of threads
//!
//! ## Usage
//!
//! ```rust
//! use nearest_place::{Candidate, Coordinate, Nearest, ScanFinder};
//!
//! let origin = Coordinate::new(48.8566, 2.3522);
//! let candidates = vec![
//!     Candidate::new(1, Coordinate::new(48.8606, 2.3376), "Louvre"),
//!     Candidate::new(2, Coordinate::new(48.8584, 2.2945), "Tour Eiffel"),
//! ];
//!
//! let result = ScanFinder::haversine().find_nearest(&origin, &candidates).unwrap();
//! assert_eq!(result.nearest().unwrap().candidate.name, "Louvre");
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use crate::adapters::{HttpSource, JsonFileSource, ScanFinder};
pub use crate::core::distance::distance_km;
pub use crate::core::{Candidate, CandidateId, Coordinate, CoordinateError, RankedCandidate};
pub use crate::ports::{CandidateSource, NearError, Nearest, NearestResult};
