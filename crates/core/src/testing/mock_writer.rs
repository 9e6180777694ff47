//! Mock writer for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::writer::{WriteError, Writer};

/// A recorded write for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedWrite {
    /// The artist the artwork was written for.
    pub artist: String,
    /// The bytes that were written.
    pub data: Vec<u8>,
}

/// Mock implementation of the Writer trait.
///
/// Provides controllable behavior for testing:
/// - Track written files for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use kodiak_core::testing::MockWriter;
///
/// let writer = MockWriter::new();
///
/// writer.write("Morphine", &[0xff, 0xd8]).await?;
///
/// // Check what was written
/// let writes = writer.recorded_writes().await;
/// assert_eq!(writes.len(), 1);
/// assert_eq!(writes[0].artist, "Morphine");
/// ```
///
/// Clones share state, so a test can keep a handle while handing a clone
/// to the scraper.
#[derive(Debug, Clone)]
pub struct MockWriter {
    /// Recorded successful writes, in call order.
    writes: Arc<RwLock<Vec<RecordedWrite>>>,
    /// If set, the next write will fail with this error.
    next_error: Arc<RwLock<Option<WriteError>>>,
}

impl Default for MockWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWriter {
    /// Create a new mock writer.
    pub fn new() -> Self {
        Self {
            writes: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Get all recorded writes.
    pub async fn recorded_writes(&self) -> Vec<RecordedWrite> {
        self.writes.read().await.clone()
    }

    /// Get the number of writes performed.
    pub async fn write_count(&self) -> usize {
        self.writes.read().await.len()
    }

    /// Configure the next write to fail with the given error.
    pub async fn set_next_error(&self, error: WriteError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<WriteError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Writer for MockWriter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn write(&self, artist: &str, data: &[u8]) -> Result<(), WriteError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.writes.write().await.push(RecordedWrite {
            artist: artist.to_string(),
            data: data.to_vec(),
        });
        Ok(())
    }
}
