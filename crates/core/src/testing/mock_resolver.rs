//! Mock resolver for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::resolver::{ResolveError, Resolver};

/// A handler that produces results dynamically based on the artist name.
type ResolveHandler = Box<dyn Fn(&str) -> Result<Vec<u8>, ResolveError> + Send + Sync>;

/// Mock implementation of the Resolver trait.
///
/// Provides controllable behavior for testing:
/// - Return configured artwork bytes per artist
/// - Track lookups for assertions
/// - Simulate failures
///
/// Artists without configured artwork resolve to [`ResolveError::NoMatch`],
/// matching what the real service does for unknown names.
///
/// # Example
///
/// ```rust,ignore
/// use kodiak_core::testing::MockResolver;
///
/// let resolver = MockResolver::new();
/// resolver.set_artwork("Morphine", vec![0xff, 0xd8]).await;
///
/// let artwork = resolver.resolve("Morphine").await?;
/// assert_eq!(artwork, vec![0xff, 0xd8]);
///
/// // Check what was looked up
/// let lookups = resolver.recorded_lookups().await;
/// assert_eq!(lookups, vec!["Morphine"]);
/// ```
///
/// Clones share state, so a test can keep a handle while handing a clone
/// to the scraper.
#[derive(Clone)]
pub struct MockResolver {
    /// Configured artwork bytes, keyed by artist name.
    artwork: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Recorded lookups, in call order.
    lookups: Arc<RwLock<Vec<String>>>,
    /// If set, the next lookup will fail with this error.
    next_error: Arc<RwLock<Option<ResolveError>>>,
    /// Handler for dynamic result generation based on the artist name.
    handler: Arc<RwLock<Option<ResolveHandler>>>,
}

impl std::fmt::Debug for MockResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockResolver")
            .field("artwork", &"<artwork>")
            .field("lookups", &"<lookups>")
            .field("next_error", &"<next_error>")
            .field("handler", &"<handler>")
            .finish()
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResolver {
    /// Create a new mock resolver that matches no artists.
    pub fn new() -> Self {
        Self {
            artwork: Arc::new(RwLock::new(HashMap::new())),
            lookups: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure artwork bytes to return for an artist.
    pub async fn set_artwork(&self, artist: &str, data: Vec<u8>) {
        self.artwork.write().await.insert(artist.to_string(), data);
    }

    /// Remove configured artwork for an artist.
    pub async fn clear_artwork(&self, artist: &str) {
        self.artwork.write().await.remove(artist);
    }

    /// Get recorded lookups, in call order.
    pub async fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }

    /// Get the number of lookups performed.
    pub async fn lookup_count(&self) -> usize {
        self.lookups.read().await.len()
    }

    /// Configure the next lookup to fail with the given error.
    pub async fn set_next_error(&self, error: ResolveError) {
        *self.next_error.write().await = Some(error);
    }

    /// Set a handler that produces results based on the artist name.
    ///
    /// When set, the handler replaces the configured artwork map entirely.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// resolver.set_handler(|artist| {
    ///     if artist == "Flaky" {
    ///         Err(ResolveError::Timeout)
    ///     } else {
    ///         Ok(vec![1, 2, 3])
    ///     }
    /// }).await;
    /// ```
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Result<Vec<u8>, ResolveError> + Send + Sync + 'static,
    {
        *self.handler.write().await = Some(Box::new(handler));
    }

    /// Clear the handler.
    pub async fn clear_handler(&self) {
        *self.handler.write().await = None;
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ResolveError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Resolver for MockResolver {
    fn name(&self) -> &str {
        "mock"
    }

    async fn resolve(&self, artist: &str) -> Result<Vec<u8>, ResolveError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.lookups.write().await.push(artist.to_string());

        let handler = self.handler.read().await;
        if let Some(ref h) = *handler {
            return h(artist);
        }
        drop(handler);

        match self.artwork.read().await.get(artist) {
            Some(data) => Ok(data.clone()),
            None => Err(ResolveError::NoMatch {
                artist: artist.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_artwork_resolves() {
        let resolver = MockResolver::new();
        resolver.set_artwork("Morphine", vec![1, 2, 3]).await;

        let artwork = resolver.resolve("Morphine").await.unwrap();

        assert_eq!(artwork, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_artist_is_no_match() {
        let resolver = MockResolver::new();

        let result = resolver.resolve("Nobody").await;

        assert!(matches!(result, Err(ResolveError::NoMatch { .. })));
    }

    #[tokio::test]
    async fn test_cleared_artwork_is_no_match() {
        let resolver = MockResolver::new();
        resolver.set_artwork("Morphine", vec![1, 2, 3]).await;
        assert!(resolver.resolve("Morphine").await.is_ok());

        resolver.clear_artwork("Morphine").await;

        let result = resolver.resolve("Morphine").await;
        assert!(matches!(result, Err(ResolveError::NoMatch { .. })));
    }

    #[tokio::test]
    async fn test_recorded_lookups() {
        let resolver = MockResolver::new();
        resolver.set_artwork("First", vec![1]).await;

        let _ = resolver.resolve("First").await;
        let _ = resolver.resolve("Second").await;

        let lookups = resolver.recorded_lookups().await;
        assert_eq!(lookups, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_error_injection() {
        let resolver = MockResolver::new();
        resolver.set_artwork("Morphine", vec![1]).await;
        resolver.set_next_error(ResolveError::Timeout).await;

        assert!(resolver.resolve("Morphine").await.is_err());

        // Error should be consumed
        assert!(resolver.resolve("Morphine").await.is_ok());
    }

    #[tokio::test]
    async fn test_handler_overrides_artwork() {
        let resolver = MockResolver::new();
        resolver.set_artwork("Morphine", vec![1]).await;
        resolver
            .set_handler(|artist| {
                Err(ResolveError::AmbiguousMatch {
                    artist: artist.to_string(),
                    count: 2,
                })
            })
            .await;

        let result = resolver.resolve("Morphine").await;
        assert!(matches!(result, Err(ResolveError::AmbiguousMatch { .. })));

        resolver.clear_handler().await;
        assert!(resolver.resolve("Morphine").await.is_ok());
    }
}
