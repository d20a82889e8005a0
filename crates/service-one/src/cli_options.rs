//! CLI options for service one
//!
//! This module defines the command-line interface options for the caller
//! service, which can be used standalone or from process supervisors.

use crate::config::{DEFAULT_SERVICE_MAP, DEFAULT_UPSTREAM_NAME};
use crate::{ServiceOneConfig, ServiceOneServer};
use clap::Parser;
use microhello_shared::{DiscoveryOptions, LoggingOptions, Result};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};

/// Microhello service one - caller forwarding to service two by logical name
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServiceOneCliOptions {
    /// Address to listen on
    #[arg(
        short,
        long,
        default_value = "127.0.0.1:8080",
        env = "MICROHELLO_SERVICE1_LISTEN_ADDR"
    )]
    pub listen_addr: SocketAddr,

    /// Logical name of the remote service to call
    #[arg(
        long,
        default_value = DEFAULT_UPSTREAM_NAME,
        env = "MICROHELLO_UPSTREAM_NAME"
    )]
    pub upstream_name: String,

    /// Outbound request timeout in seconds
    #[arg(long, default_value_t = 5, env = "MICROHELLO_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    #[command(flatten)]
    pub discovery: DiscoveryOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

impl ServiceOneCliOptions {
    /// Run the service with the configured options
    pub async fn run(self) -> Result<()> {
        let config = self.to_config()?;

        info!(
            listen_addr = %config.listen_addr,
            upstream = %config.upstream_name,
            service_map = %config.service_map,
            timeout = ?config.request_timeout,
            "Configuration loaded successfully"
        );

        let server = ServiceOneServer::bind(config).await?;

        info!("Service one initialized, ready to handle connections");

        match server.run().await {
            Ok(()) => {
                info!("Server stopped normally");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Server encountered an error");
                Err(e)
            }
        }
    }

    /// Convert CLI options to a validated ServiceOneConfig
    pub fn to_config(&self) -> Result<ServiceOneConfig> {
        ServiceOneConfig::new(ServiceOneConfig {
            listen_addr: self.listen_addr,
            upstream_name: self.upstream_name.clone(),
            service_map: self.discovery.service_map_or(DEFAULT_SERVICE_MAP),
            request_timeout: Duration::from_secs(self.timeout_seconds),
            log_level: self.logging.log_level.clone(),
        })
    }
}
