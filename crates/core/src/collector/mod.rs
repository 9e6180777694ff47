//! Artist directory collection.
//!
//! This module provides the `Collector` trait and the filesystem
//! implementation that scans a music library root, one level deep, for
//! artist directories still lacking an artwork file.

mod error;
mod fs_collector;
mod traits;

pub use error::CollectorError;
pub use fs_collector::FsCollector;
pub use traits::Collector;
