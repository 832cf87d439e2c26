//! # Core Domain
//!
//! Pure math, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `Coordinate` - A latitude/longitude position
//! - `CandidateId` - Stable key for a point of interest
//! - `Candidate` - A point of interest, and `RankedCandidate` once measured
//! - `Distance` - Trait for measuring how far apart two coordinates are
//!
//! Every function here is deterministic and free of side effects.

mod candidate;
mod coordinate;
mod id;
pub mod config;
pub mod distance;

// Re-exports
pub use candidate::{Candidate, RankedCandidate};
pub use coordinate::{Coordinate, CoordinateError, MAX_LATITUDE, MAX_LONGITUDE};
pub use id::CandidateId;
