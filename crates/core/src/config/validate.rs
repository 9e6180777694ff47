use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Library root exists and is a directory
/// - Artwork file name is a plain, non-empty file name
/// - API key is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let root = &config.library.root;
    let metadata = std::fs::metadata(root)
        .map_err(|_| ConfigError::LibraryRootNotFound(root.display().to_string()))?;
    if !metadata.is_dir() {
        return Err(ConfigError::LibraryRootNotADirectory(
            root.display().to_string(),
        ));
    }

    let artwork_file = &config.library.artwork_file;
    if artwork_file.is_empty() {
        return Err(ConfigError::ValidationError(
            "library.artwork_file cannot be empty".to_string(),
        ));
    }
    if artwork_file.contains('/') || artwork_file.contains(std::path::MAIN_SEPARATOR) {
        return Err(ConfigError::ValidationError(
            "library.artwork_file must be a plain file name".to_string(),
        ));
    }

    if config.audiodb.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "audiodb.api_key cannot be empty".to_string(),
        ));
    }

    Ok(())
}
