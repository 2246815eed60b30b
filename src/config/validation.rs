use crate::config::types::Config;
use crate::utils::error::{BoxResult, FolioError};

/// Validate a loaded configuration before the server uses it
pub fn validate_config(config: &Config) -> BoxResult<()> {
    if !config.source.is_dir() {
        return Err(FolioError::Config(format!(
            "Content root is not a directory: {}", config.source.display()
        )).into());
    }

    if config.default_template.trim().is_empty() {
        return Err(FolioError::Config(
            "default_template must not be empty".to_string()
        ).into());
    }

    if config.port == 0 {
        return Err(FolioError::Config(
            "port must be non-zero".to_string()
        ).into());
    }

    Ok(())
}
