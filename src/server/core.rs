use std::net::SocketAddr;
use log::{error, info};
use tokio::signal;

use crate::config::Config;
use crate::content::verify_content_root;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::utils::error::BoxResult;

/// Start the content server and run until Ctrl-C
pub async fn serve(server_config: &ServerConfig, config: &Config) -> BoxResult<()> {
    // A malformed metadata file should fail startup, not a later request
    info!("Verifying content root {}", config.source.display());
    verify_content_root(&config.source)?;

    let app = create_app(config)?;
    let addr: SocketAddr = server_config.address_string().parse()?;

    info!("Starting server at {}", server_config.url());
    info!("Serving content from {}", config.source.display());

    let server = axum_server::bind(addr).serve(app.into_make_service());

    print_server_banner(server_config, config);

    // Run the server with graceful shutdown
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            } else {
                info!("Server stopped");
            }
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig, config: &Config) {
    println!("\n{}", "-".repeat(60));
    println!(" Folio Server");
    println!(" - URL: {}", server_config.url());
    println!(" - Content root: {}", config.source.display());
    println!(" - Templates: {}", config.templates_path().display());
    println!(" - Compression: Enabled");
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
