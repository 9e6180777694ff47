//! Trait definitions for the collector module.

use async_trait::async_trait;

use super::error::CollectorError;

/// A collector that discovers artist directories needing artwork.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Returns the name of this collector implementation.
    fn name(&self) -> &str;

    /// Returns the artist directory names that lack the artwork file,
    /// sorted so processing order is reproducible across runs.
    async fn collect(&self) -> Result<Vec<String>, CollectorError>;
}
