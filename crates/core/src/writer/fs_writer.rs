//! Filesystem implementation of the writer.

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::config::LibraryConfig;

use super::error::WriteError;
use super::traits::Writer;

/// Persists artwork at `<root>/<artist>/<artwork_file>`.
///
/// The artist directory is the one the collector discovered, so it is not
/// created here. An existing file at the exact destination path is
/// overwritten.
pub struct FsWriter {
    library: LibraryConfig,
}

impl FsWriter {
    /// Creates a new writer over the given library.
    pub fn new(library: LibraryConfig) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Writer for FsWriter {
    fn name(&self) -> &str {
        "fs"
    }

    async fn write(&self, artist: &str, data: &[u8]) -> Result<(), WriteError> {
        let path = self.library.artwork_path(artist);
        debug!("Writing {}", path.display());

        fs::write(&path, data)
            .await
            .map_err(|e| WriteError::write_artwork(path, e))?;

        Ok(())
    }
}
