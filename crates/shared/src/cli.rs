//! Shared CLI functionality for the microhello services
//!
//! This module provides common CLI options and utilities that are shared
//! across both services to reduce code duplication and ensure consistency.

use clap::Args;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Common logging options shared across both services
#[derive(Args, Debug, Clone)]
pub struct LoggingOptions {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "MICROHELLO_LOG_LEVEL")]
    pub log_level: String,
}

/// Common service discovery options
///
/// The registry is a static map configured at startup. Entries are
/// comma-separated `name=base_url` pairs, e.g.
/// `micro-service2=http://127.0.0.1:8081`.
#[derive(Args, Debug, Clone)]
pub struct DiscoveryOptions {
    /// Logical service map entries (comma-separated name=base_url pairs)
    #[arg(long, env = "MICROHELLO_SERVICE_MAP")]
    pub service_map: Option<String>,
}

impl LoggingOptions {
    /// Initialize logging with the configured level
    pub fn init_logging(&self) {
        let level = self.parse_log_level();

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set logging subscriber");
    }

    /// Parse the log level string into a tracing Level
    pub fn parse_log_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        }
    }
}

impl DiscoveryOptions {
    /// Get the service map specification with a default fallback
    pub fn service_map_or(&self, default: &str) -> String {
        self.service_map
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        let opts = LoggingOptions {
            log_level: "debug".to_string(),
        };
        assert_eq!(opts.parse_log_level(), Level::DEBUG);

        let opts = LoggingOptions {
            log_level: "ERROR".to_string(),
        };
        assert_eq!(opts.parse_log_level(), Level::ERROR);

        let opts = LoggingOptions {
            log_level: "invalid".to_string(),
        };
        assert_eq!(opts.parse_log_level(), Level::INFO);
    }

    #[test]
    fn test_service_map_or() {
        let opts = DiscoveryOptions {
            service_map: Some("micro-service2=http://10.0.0.2:8081".to_string()),
        };
        assert_eq!(
            opts.service_map_or("micro-service2=http://127.0.0.1:8081"),
            "micro-service2=http://10.0.0.2:8081"
        );

        let opts = DiscoveryOptions { service_map: None };
        assert_eq!(
            opts.service_map_or("micro-service2=http://127.0.0.1:8081"),
            "micro-service2=http://127.0.0.1:8081"
        );
    }
}
