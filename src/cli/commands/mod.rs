use std::path::PathBuf;
use std::process;
use log::{error, info};

use crate::config;
use crate::content::verify_content_root;
use crate::server::{serve, ServerConfig};

/// Handle the serve subcommand (also the default action)
pub async fn handle_serve_command(
    source: Option<&PathBuf>,
    config_file: Option<PathBuf>,
    host: Option<&str>,
    port: Option<u16>,
) {
    let config = load_or_exit(source, config_file);

    let server_config = ServerConfig::new(
        host.unwrap_or(config.host.as_str()),
        port.unwrap_or(config.port),
    );

    if let Err(e) = serve(&server_config, &config).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}

/// Handle the check subcommand: parse all metadata without serving
pub fn handle_check_command(source: Option<&PathBuf>, config_file: Option<PathBuf>) {
    let config = load_or_exit(source, config_file);

    match verify_content_root(&config.source) {
        Ok(count) => info!("Content root OK ({} metadata documents)", count),
        Err(e) => {
            error!("Content check failed: {}", e);
            process::exit(1);
        }
    }
}

fn load_or_exit(source: Option<&PathBuf>, config_file: Option<PathBuf>) -> config::Config {
    let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("./"));

    match config::load_config(&source_dir, config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    }
}
