// Module declarations
mod cli;
mod config;
mod content;
mod render;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
