//! Artwork resolution against TheAudioDB.
//!
//! This module provides the `Resolver` trait and the TheAudioDB-backed
//! implementation: one search request per artist, a disambiguation policy
//! over the returned records, and the download of the selected thumbnail.
//! Resolution never writes anything; it yields raw image bytes or a
//! classified failure for the caller to act on.

mod audiodb;
mod types;

pub use audiodb::{AudioDbConfig, AudioDbResolver, DEFAULT_API_KEY};
pub use types::{ResolveError, Resolver};
