//! Testing utilities and mock implementations for pipeline tests.
//!
//! This module provides mock implementations of the three pipeline traits,
//! allowing full scrape runs without a real music library or network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use kodiak_core::testing::{fixtures, MockCollector, MockResolver, MockWriter};
//!
//! let collector = MockCollector::with_candidates(vec!["Morphine".to_string()]);
//! let resolver = MockResolver::new();
//! let writer = MockWriter::new();
//!
//! // Configure mock responses
//! resolver.set_artwork("Morphine", fixtures::jpeg_bytes()).await;
//!
//! // Use in a Scraper...
//! ```

mod mock_collector;
mod mock_resolver;
mod mock_writer;

pub use mock_collector::MockCollector;
pub use mock_resolver::MockResolver;
pub use mock_writer::{MockWriter, RecordedWrite};

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::json;

    /// A few bytes that look enough like a JPEG for tests.
    pub fn jpeg_bytes() -> Vec<u8> {
        vec![0xff, 0xd8, 0xff, 0xe0, 0x4b, 0x4f, 0x44, 0x49, 0xff, 0xd9]
    }

    /// Build a TheAudioDB-shaped search response body.
    ///
    /// One record per element in `thumbs`; `None` produces a record whose
    /// thumbnail field is null. An empty slice produces `{"artists": null}`,
    /// which is what the real service returns for an unknown artist.
    pub fn search_json(thumbs: &[Option<&str>]) -> String {
        if thumbs.is_empty() {
            return json!({ "artists": null }).to_string();
        }
        let artists: Vec<_> = thumbs
            .iter()
            .enumerate()
            .map(|(i, thumb)| {
                json!({
                    "idArtist": format!("11{}", i),
                    "strArtist": format!("Artist {}", i),
                    "strArtistThumb": thumb,
                })
            })
            .collect();
        json!({ "artists": artists }).to_string()
    }

}
