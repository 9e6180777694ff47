//! Mock collector for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::collector::{Collector, CollectorError};

/// Mock implementation of the Collector trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable candidate list
/// - Count collect calls for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use kodiak_core::testing::MockCollector;
///
/// let collector = MockCollector::with_candidates(vec!["Morphine".to_string()]);
///
/// let candidates = collector.collect().await?;
/// assert_eq!(candidates, vec!["Morphine"]);
/// assert_eq!(collector.collect_count().await, 1);
/// ```
///
/// Clones share state, so a test can keep a handle while handing a clone
/// to the scraper.
#[derive(Debug, Clone)]
pub struct MockCollector {
    /// Candidates to return from collect.
    candidates: Arc<RwLock<Vec<String>>>,
    /// Number of collect calls made.
    calls: Arc<RwLock<usize>>,
    /// If set, the next collect will fail with this error.
    next_error: Arc<RwLock<Option<CollectorError>>>,
}

impl Default for MockCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCollector {
    /// Create a new mock collector with no candidates.
    pub fn new() -> Self {
        Self {
            candidates: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(0)),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock collector with predefined candidates.
    pub fn with_candidates(candidates: Vec<String>) -> Self {
        Self {
            candidates: Arc::new(RwLock::new(candidates)),
            calls: Arc::new(RwLock::new(0)),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the candidates to return for subsequent collect calls.
    pub async fn set_candidates(&self, candidates: Vec<String>) {
        *self.candidates.write().await = candidates;
    }

    /// Get the number of collect calls performed.
    pub async fn collect_count(&self) -> usize {
        *self.calls.read().await
    }

    /// Configure the next collect to fail with the given error.
    pub async fn set_next_error(&self, error: CollectorError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<CollectorError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Collector for MockCollector {
    fn name(&self) -> &str {
        "mock"
    }

    async fn collect(&self) -> Result<Vec<String>, CollectorError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        *self.calls.write().await += 1;
        Ok(self.candidates.read().await.clone())
    }
}
