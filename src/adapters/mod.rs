//! Adapters - Swappable implementations of port interfaces

mod file;
mod finder;
pub mod http;

pub use file::JsonFileSource;
pub use finder::ScanFinder;
pub use http::HttpSource;
