//! Error types for the writer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting artwork.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the artwork file.
    #[error("Failed to write artwork file: {path}")]
    WriteArtwork {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Creates a write-artwork error.
    pub fn write_artwork(path: PathBuf, source: std::io::Error) -> Self {
        Self::WriteArtwork { path, source }
    }
}
