//! Service two configuration management

use microhello_shared::{MicrohelloError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Valid logging levels accepted in configuration
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for the callee service
///
/// All fields are validated during construction so the service can start
/// without surprises. The configuration is immutable after validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceTwoConfig {
    /// Address to bind the HTTP server to
    ///
    /// **Default**: `127.0.0.1:8081`
    /// **Environment**: `MICROHELLO_SERVICE2_LISTEN_ADDR`
    pub listen_addr: SocketAddr,

    /// Logging level for the service
    ///
    /// **Default**: `"info"`
    /// **Environment**: `MICROHELLO_LOG_LEVEL`
    /// **Validation**: One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for ServiceTwoConfig {
    /// Creates a default configuration with sensible local defaults
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceTwoConfig {
    /// Validates a configuration and returns it ready for use
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field.
    pub fn new(config: ServiceTwoConfig) -> Result<Self> {
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
        let config = ServiceTwoConfig::default();
        assert_eq!(config.listen_addr.port(), 8081);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(ServiceTwoConfig::new(ServiceTwoConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_rejects_invalid_log_level() {
        let config = ServiceTwoConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };

        let result = ServiceTwoConfig::new(config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid log_level"));
    }
}
