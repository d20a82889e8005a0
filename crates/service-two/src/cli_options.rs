//! CLI options for service two
//!
//! This module defines the command-line interface options for the callee
//! service, which can be used standalone or from process supervisors.

use crate::{ServiceTwoConfig, ServiceTwoServer};
use clap::Parser;
use microhello_shared::{LoggingOptions, Result};
use std::net::SocketAddr;
use tracing::{error, info};

/// Microhello service two - callee answering the greeting endpoint
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServiceTwoCliOptions {
    /// Address to listen on
    #[arg(
        short,
        long,
        default_value = "127.0.0.1:8081",
        env = "MICROHELLO_SERVICE2_LISTEN_ADDR"
    )]
    pub listen_addr: SocketAddr,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

impl ServiceTwoCliOptions {
    /// Run the service with the configured options
    pub async fn run(self) -> Result<()> {
        let config = self.to_config()?;

        info!(
            listen_addr = %config.listen_addr,
            log_level = %config.log_level,
            "Configuration loaded successfully"
        );

        let server = ServiceTwoServer::bind(config).await?;

        info!("Service two initialized, ready to handle connections");

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

    /// Convert CLI options to a validated ServiceTwoConfig
    pub fn to_config(&self) -> Result<ServiceTwoConfig> {
        ServiceTwoConfig::new(ServiceTwoConfig {
            listen_addr: self.listen_addr,
            log_level: self.logging.log_level.clone(),
        })
    }
}
