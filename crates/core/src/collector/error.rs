//! Error types for the collector module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting artist directories.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Library root missing, not a directory, or unreadable.
    #[error("Failed to read library root: {path}")]
    ReadLibraryRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectorError {
    /// Creates a read-library-root error.
    pub fn read_library_root(path: PathBuf, source: std::io::Error) -> Self {
        Self::ReadLibraryRoot { path, source }
    }
}
