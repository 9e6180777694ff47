//! Filesystem implementation of the collector.

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::LibraryConfig;

use super::error::CollectorError;
use super::traits::Collector;

/// Collects artist directories by scanning the library root on the local
/// filesystem.
///
/// The scan is one level deep: immediate subdirectories of the root are
/// treated as artists, and each is kept only if it does not already contain
/// the configured artwork file. Hidden entries (leading `.`) and
/// non-directory entries are excluded.
pub struct FsCollector {
    library: LibraryConfig,
}

impl FsCollector {
    /// Creates a new collector over the given library.
    pub fn new(library: LibraryConfig) -> Self {
        Self { library }
    }

    /// Lists the non-hidden artist directories directly under the root,
    /// sorted by name.
    async fn list_artist_dirs(&self) -> Result<Vec<String>, CollectorError> {
        let root = &self.library.root;
        let mut entries = fs::read_dir(root)
            .await
            .map_err(|e| CollectorError::read_library_root(root.clone(), e))?;

        let mut artist_dirs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CollectorError::read_library_root(root.clone(), e))?
        {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping non-unicode entry {:?}", raw);
                    continue;
                }
            };
            if name.starts_with('.') {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => artist_dirs.push(name),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry '{}': {}", name, e),
            }
        }

        artist_dirs.sort();
        Ok(artist_dirs)
    }
}

#[async_trait]
impl Collector for FsCollector {
    fn name(&self) -> &str {
        "fs"
    }

    async fn collect(&self) -> Result<Vec<String>, CollectorError> {
        let artist_dirs = self.list_artist_dirs().await?;
        debug!(
            "Identified {} artists: {:?}",
            artist_dirs.len(),
            artist_dirs
        );

        let mut candidates = Vec::with_capacity(artist_dirs.len());
        let mut already_covered = 0;
        for artist in artist_dirs {
            match fs::try_exists(self.library.artwork_path(&artist)).await {
                Ok(true) => already_covered += 1,
                Ok(false) => candidates.push(artist),
                Err(e) => warn!("Skipping artist '{}' this run: {}", artist, e),
            }
        }
        info!(
            "Skipping {} artists that already have artwork",
            already_covered
        );

        Ok(candidates)
    }
}
