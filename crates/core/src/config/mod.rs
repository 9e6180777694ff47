mod types;
mod validate;

pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Library root not found: {0}")]
    LibraryRootNotFound(String),

    #[error("Library root is not a directory: {0}")]
    LibraryRootNotADirectory(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
