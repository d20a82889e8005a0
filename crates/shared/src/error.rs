//! # Shared Error Handling Module
//!
//! Error handling for the microhello services with proper error
//! classification, context preservation, and HTTP status mapping.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: Invalid service configuration
//! - **Network Errors**: Connection failures, DNS issues
//! - **Upstream Errors**: Remote service failures, non-success responses
//! - **Timeout Errors**: Operations exceeding configured deadlines
//! - **Resolution Errors**: Logical service names with no registry entry

use std::net::AddrParseError;
use thiserror::Error;
use tracing::warn;

/// Result type alias for microhello operations
///
/// This is the standard Result type used throughout the microhello codebase.
/// It provides a consistent interface for error handling and makes
/// error propagation more ergonomic.
pub type Result<T> = std::result::Result<T, MicrohelloError>;

/// Error types for microhello service operations
///
/// This enum covers the error conditions that can occur while serving
/// requests or calling a remote service. Each variant includes relevant
/// context and maps to an HTTP status code where applicable.
///
/// ## Design Principles
///
/// - Error messages are human-readable and actionable
/// - Context is preserved through the error chain
/// - Error types map clearly to HTTP status codes where applicable
#[derive(Error, Debug)]
pub enum MicrohelloError {
    /// Configuration validation errors
    ///
    /// These errors occur during service startup when validating the
    /// provided configuration. They typically indicate user configuration
    /// mistakes that need to be corrected before the service can start.
    ///
    /// **HTTP Status Mapping**: Not applicable (startup error)
    ///
    /// **Recovery Strategy**: Fix configuration and restart
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// Optional source error for additional context
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network-level connectivity errors
    ///
    /// These errors occur when a service cannot establish or maintain a
    /// network connection to a remote service. They include DNS resolution
    /// failures, connection timeouts, and connection refused errors.
    ///
    /// **HTTP Status Mapping**: 502 Bad Gateway
    ///
    /// **Recovery Strategy**: Check the remote service, verify the registry entry
    #[error("Network error connecting to {target}: {message}")]
    Network {
        /// Target address that failed to connect
        target: String,
        /// Descriptive error message
        message: String,
        /// Underlying network error for debugging
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Upstream service errors
    ///
    /// These errors occur when a remote service returns an error response.
    /// This includes HTTP error status codes and malformed response bodies.
    ///
    /// **HTTP Status Mapping**: Forward upstream status or 502 Bad Gateway
    ///
    /// **Recovery Strategy**: Return error to client, inspect the remote service
    #[error("Upstream error from {target}: HTTP {status} - {message}")]
    Upstream {
        /// Remote service address
        target: String,
        /// HTTP status code from the remote service
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// Request timeout errors
    ///
    /// These errors occur when operations exceed configured timeout values.
    ///
    /// **HTTP Status Mapping**: 504 Gateway Timeout
    ///
    /// **Recovery Strategy**: Retry later, check remote service health
    #[error("Operation timed out after {timeout_ms}ms: {operation}")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
        /// Description of the operation that timed out
        operation: String,
    },

    /// Logical service name resolution errors
    ///
    /// These errors occur when a logical service name has no entry in the
    /// service registry. Resolution happens at call time, so a missing
    /// entry surfaces on the first outbound call rather than at startup.
    ///
    /// **HTTP Status Mapping**: 503 Service Unavailable
    ///
    /// **Recovery Strategy**: Add the service to the registry configuration
    #[error("Service '{name}' not found in registry")]
    ServiceNotFound {
        /// Logical service name that failed to resolve
        name: String,
    },

    /// Internal system errors
    ///
    /// These errors represent unexpected internal failures that shouldn't
    /// normally occur during operation.
    ///
    /// **HTTP Status Mapping**: 500 Internal Server Error
    ///
    /// **Recovery Strategy**: Log error, investigate
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal failure
        message: String,
        /// Source error for debugging
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MicrohelloError {
    /// Creates a configuration error with context
    ///
    /// # Arguments
    ///
    /// * `message` - Human-readable error description
    /// * `source` - Optional underlying error cause
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microhello_shared::error::MicrohelloError;
    ///
    /// let error = MicrohelloError::configuration("Invalid listen address", None);
    /// ```
    pub fn configuration(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source,
        }
    }

    /// Creates a network error with target and context
    ///
    /// # Arguments
    ///
    /// * `target` - Target address that failed
    /// * `message` - Error description
    /// * `source` - Optional underlying network error
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microhello_shared::error::MicrohelloError;
    ///
    /// let error = MicrohelloError::network("127.0.0.1:8081", "Connection refused", None);
    /// ```
    pub fn network(
        target: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            target: target.into(),
            message: message.into(),
            source,
        }
    }

    /// Creates an upstream error with target and status information
    ///
    /// # Arguments
    ///
    /// * `target` - Remote service address
    /// * `status` - HTTP status code from the remote service
    /// * `message` - Error message or response body
    pub fn upstream(target: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            target: target.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a timeout error with operation context
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout duration that was exceeded
    /// * `operation` - Description of the operation that timed out
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microhello_shared::error::MicrohelloError;
    /// use std::time::Duration;
    ///
    /// let error = MicrohelloError::timeout(Duration::from_secs(5), "remote hello call");
    /// ```
    pub fn timeout(timeout: std::time::Duration, operation: impl Into<String>) -> Self {
        Self::Timeout {
            timeout_ms: timeout.as_millis() as u64,
            operation: operation.into(),
        }
    }

    /// Creates a service resolution error
    ///
    /// # Arguments
    ///
    /// * `name` - Logical service name that failed to resolve
    pub fn service_not_found(name: impl Into<String>) -> Self {
        Self::ServiceNotFound { name: name.into() }
    }

    /// Creates an internal error with source context
    ///
    /// # Arguments
    ///
    /// * `message` - Error description
    /// * `source` - Optional underlying error cause
    pub fn internal(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }

    /// Maps this error to an appropriate HTTP status code
    ///
    /// This method provides a consistent mapping from internal errors to
    /// HTTP status codes that should be returned to clients. Remote-call
    /// failures all surface as 5xx responses to the original caller.
    ///
    /// # Status Code Mapping
    ///
    /// - Configuration errors: Not applicable (startup only)
    /// - Network errors: 502 Bad Gateway
    /// - Upstream errors: Forward upstream status or 502
    /// - Timeout errors: 504 Gateway Timeout
    /// - Resolution errors: 503 Service Unavailable
    /// - Internal errors: 500 Internal Server Error
    pub fn to_http_status(&self) -> u16 {
        match self {
            MicrohelloError::Configuration { .. } => {
                // Configuration errors shouldn't reach HTTP layer
                warn!("Configuration error reached HTTP status mapping");
                500
            }
            MicrohelloError::Network { .. } => 502, // Bad Gateway
            MicrohelloError::Upstream { status, .. } => {
                // Forward upstream status, but ensure it's valid
                if *status >= 400 && *status <= 599 {
                    *status
                } else {
                    502 // Bad Gateway for invalid status codes
                }
            }
            MicrohelloError::Timeout { .. } => 504, // Gateway Timeout
            MicrohelloError::ServiceNotFound { .. } => 503, // Service Unavailable
            MicrohelloError::Internal { .. } => 500, // Internal Server Error
        }
    }

    /// Checks if this error represents a temporary condition
    ///
    /// Temporary errors may resolve themselves (a remote service coming
    /// back up), while permanent errors require operator intervention.
    ///
    /// # Classification
    ///
    /// **Temporary:**
    /// - Network failures
    /// - Timeouts
    /// - 5xx upstream errors
    /// - Unresolvable service names (registry may be updated)
    ///
    /// **Permanent:**
    /// - Configuration errors
    /// - 4xx upstream errors
    /// - Internal logic errors
    pub fn is_temporary(&self) -> bool {
        match self {
            MicrohelloError::Configuration { .. } => false,
            MicrohelloError::Network { .. } => true,
            MicrohelloError::Upstream { status, .. } => *status >= 500,
            MicrohelloError::Timeout { .. } => true,
            MicrohelloError::ServiceNotFound { .. } => true,
            MicrohelloError::Internal { .. } => false,
        }
    }
}

/// Conversion from address parsing errors
///
/// This provides automatic conversion from std::net::AddrParseError
/// to MicrohelloError, making error handling more ergonomic when parsing
/// network addresses in configuration.
impl From<AddrParseError> for MicrohelloError {
    fn from(err: AddrParseError) -> Self {
        MicrohelloError::configuration(
            format!("Invalid network address: {}", err),
            Some(Box::new(err)),
        )
    }
}

/// Conversion from I/O errors
///
/// This provides automatic conversion from std::io::Error to
/// MicrohelloError, mapping common I/O error kinds to appropriate
/// error types.
impl From<std::io::Error> for MicrohelloError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut => {
                MicrohelloError::timeout(std::time::Duration::from_secs(30), "I/O operation")
            }
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::ConnectionReset => {
                MicrohelloError::network("unknown", "Connection failed", Some(Box::new(err)))
            }
            std::io::ErrorKind::AddrInUse => {
                MicrohelloError::configuration("Listen address already in use", Some(Box::new(err)))
            }
            _ => MicrohelloError::internal("I/O error", Some(Box::new(err))),
        }
    }
}
