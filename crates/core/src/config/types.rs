use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::resolver::AudioDbConfig;

/// Default artwork file name, shared by the CLI surface.
pub const DEFAULT_ARTWORK_FILE: &str = "artist.jpg";

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub library: LibraryConfig,
    #[serde(default)]
    pub audiodb: AudioDbConfig,
}

/// Music library configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory containing one subdirectory per artist
    pub root: PathBuf,
    /// File name that marks an artist directory as already having artwork,
    /// and under which downloaded artwork is saved
    #[serde(default = "default_artwork_file")]
    pub artwork_file: String,
}

fn default_artwork_file() -> String {
    DEFAULT_ARTWORK_FILE.to_string()
}

impl LibraryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            artwork_file: default_artwork_file(),
        }
    }

    /// Path of the artwork file for one artist directory.
    pub fn artwork_path(&self, artist: &str) -> PathBuf {
        self.root.join(artist).join(&self.artwork_file)
    }
}
