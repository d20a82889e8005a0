//! # Microhello Service Two - Main Entry Point
//!
//! Callee service answering the greeting endpoint.

use clap::Parser;
use microhello_service_two::ServiceTwoCliOptions;
use microhello_shared::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line options
    let cli_opts = ServiceTwoCliOptions::parse();

    // Initialize logging with the specified level
    cli_opts.logging.init_logging();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting microhello service two"
    );

    // Run the service with the parsed options
    cli_opts.run().await
}
