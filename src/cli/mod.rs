pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(types::Commands::Serve { host, port }) => {
            commands::handle_serve_command(
                cli.source.as_ref(),
                cli.config.clone(),
                host.as_deref(),
                *port,
            ).await;
        },
        Some(types::Commands::Check {}) => {
            commands::handle_check_command(cli.source.as_ref(), cli.config.clone());
        },
        None => {
            // Serving is the default action
            commands::handle_serve_command(
                cli.source.as_ref(),
                cli.config.clone(),
                None,
                None,
            ).await;
        },
    }
}
