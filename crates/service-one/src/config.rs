//! Service one configuration management
//!
//! Configuration for the caller service with validation on load.
//!
//! ## Configuration Sources (precedence order)
//!
//! 1. Command line arguments (highest priority)
//! 2. Environment variables (MICROHELLO_*)
//! 3. Compiled defaults (lowest priority)

use microhello_shared::{MicrohelloError, Result, ServiceRegistry};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Default service map pointing at a local service two instance
pub const DEFAULT_SERVICE_MAP: &str = "micro-service2=http://127.0.0.1:8081";

/// Default logical name of the remote service to call
pub const DEFAULT_UPSTREAM_NAME: &str = "micro-service2";

/// Valid logging levels accepted in configuration
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for the caller service
///
/// All fields are validated during construction so the service can start
/// without surprises. The configuration is immutable after validation.
///
/// Note that the upstream name is not required to appear in the service
/// map: logical names resolve at call time, so a missing entry surfaces
/// as a server error on the forwarding endpoint rather than preventing
/// startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOneConfig {
    /// Address to bind the HTTP server to
    ///
    /// **Default**: `127.0.0.1:8080`
    /// **Environment**: `MICROHELLO_SERVICE1_LISTEN_ADDR`
    pub listen_addr: SocketAddr,

    /// Logical name of the remote service called by the forwarding endpoint
    ///
    /// **Default**: `"micro-service2"`
    /// **Environment**: `MICROHELLO_UPSTREAM_NAME`
    /// **Validation**: Must be non-empty
    pub upstream_name: String,

    /// Service registry entries as comma-separated `name=base_url` pairs
    ///
    /// **Default**: `"micro-service2=http://127.0.0.1:8081"`
    /// **Environment**: `MICROHELLO_SERVICE_MAP`
    /// **Validation**: Every entry must parse with an http(s) base URL
    pub service_map: String,

    /// Timeout applied to each outbound remote call
    ///
    /// **Default**: `5 seconds`
    /// **Environment**: `MICROHELLO_TIMEOUT_SECONDS`
    /// **Validation**: Must be between 1ms and 300 seconds
    pub request_timeout: Duration,

    /// Logging level for the service
    ///
    /// **Default**: `"info"`
    /// **Environment**: `MICROHELLO_LOG_LEVEL`
    /// **Validation**: One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for ServiceOneConfig {
    /// Creates a default configuration with sensible local defaults
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            upstream_name: DEFAULT_UPSTREAM_NAME.to_string(),
            service_map: DEFAULT_SERVICE_MAP.to_string(),
            request_timeout: Duration::from_secs(5),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceOneConfig {
    /// Validates a configuration and returns it ready for use
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field.
    pub fn new(config: ServiceOneConfig) -> Result<Self> {
        if config.request_timeout < Duration::from_millis(1)
            || config.request_timeout > Duration::from_secs(300)
        {
            return Err(MicrohelloError::configuration(
                "request timeout must be between 1ms and 300 seconds",
                None,
            ));
        }

        if config.upstream_name.trim().is_empty() {
            return Err(MicrohelloError::configuration(
                "upstream_name must not be empty",
                None,
            ));
        }

        // Parse eagerly so malformed registry entries fail at startup
        ServiceRegistry::from_spec(&config.service_map)?;

        if !VALID_LOG_LEVELS.contains(&config.log_level.as_str()) {
            return Err(MicrohelloError::configuration(
                format!(
                    "invalid log_level '{}': expected one of {:?}",
                    config.log_level, VALID_LOG_LEVELS
                ),
                None,
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = ServiceOneConfig::default();

        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.upstream_name, "micro-service2");
        assert_eq!(config.service_map, "micro-service2=http://127.0.0.1:8081");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(ServiceOneConfig::new(ServiceOneConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = ServiceOneConfig {
            request_timeout: Duration::from_secs(0),
            ..Default::default()
        };

        let result = ServiceOneConfig::new(config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout must be"));
    }

    #[test]
    fn test_validation_rejects_empty_upstream_name() {
        let config = ServiceOneConfig {
            upstream_name: "  ".to_string(),
            ..Default::default()
        };

        let result = ServiceOneConfig::new(config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("upstream_name must not be empty"));
    }

    #[test]
    fn test_validation_rejects_malformed_service_map() {
        let config = ServiceOneConfig {
            service_map: "micro-service2".to_string(),
            ..Default::default()
        };

        assert!(ServiceOneConfig::new(config).is_err());
    }

    #[test]
    fn test_validation_allows_upstream_missing_from_map() {
        // Resolution happens at call time; startup must succeed
        let config = ServiceOneConfig {
            service_map: "billing=http://127.0.0.1:9000".to_string(),
            ..Default::default()
        };

        assert!(ServiceOneConfig::new(config).is_ok());
    }
}
