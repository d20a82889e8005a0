//! # Microhello Service One - Main Entry Point
//!
//! Caller service forwarding to service two through name-based discovery.

use clap::Parser;
use microhello_service_one::ServiceOneCliOptions;
use microhello_shared::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line options
    let cli_opts = ServiceOneCliOptions::parse();

    // Initialize logging with the specified level
    cli_opts.logging.init_logging();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting microhello service one"
    );

    // Run the service with the parsed options
    cli_opts.run().await
}
