use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, FolioError};

/// Configuration file names to look for in the source directory
const CONFIG_FILES: [&str; 3] = ["folio.yml", "folio.yaml", "folio.toml"];

/// Load configuration from an explicit file or the default locations
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<PathBuf>,
) -> BoxResult<Config> {
    let config_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(FolioError::Config(format!(
                    "Configuration file not found: {}", path.display()
                )).into());
            }
            Some(path)
        }
        None => find_default_config_file(&source_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // The CLI source directory wins when the file left it at the default
    if config.source == PathBuf::from("./") {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file that exists
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES.iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| FolioError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let ext = path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content)
            .map_err(|e| FolioError::Config(format!(
                "Invalid YAML in {}: {}", path.display(), e
            )).into()),
        "toml" => toml::from_str(&content)
            .map_err(|e| FolioError::Config(format!(
                "Invalid TOML in {}: {}", path.display(), e
            )).into()),
        _ => Err(FolioError::Config(format!(
            "Unsupported configuration file format: {}", path.display()
        )).into()),
    }
}
