//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT operations are needed
//! - Adapters define HOW they're implemented
//!
//! The core doesn't know about adapters.
//! Adapters implement these port traits.

mod nearest;
mod source;

// Re-export traits
pub use nearest::Nearest;
pub use source::CandidateSource;

// Re-export types from nearest
pub use nearest::{NearError, NearResult, NearestResult, Subject};

// Re-export types from source
pub use source::{SourceError, SourceResult};
