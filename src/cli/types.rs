use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "File-backed web content server with Liquid templates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Content root directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Custom configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the content root over HTTP (the default)
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Host to bind to (overrides the configuration file)
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on (overrides the configuration file)
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Parse every metadata document under the content root and report problems
    #[command(alias = "c")]
    Check {},
}
