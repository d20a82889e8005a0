//! # Microhello Shared Library
//!
//! Shared utilities and types for the microhello services. This crate
//! provides the common functionality used by both service binaries:
//! error handling, CLI option groups, logging setup, protocol constants,
//! and name-based service discovery.
//!
//! ## Features
//!
//! - **Error Handling**: Error types with HTTP status mapping
//! - **Service Discovery**: Static registry resolving logical names to base URLs
//! - **HTTP Client**: Pooled client for outbound service-to-service calls
//! - **CLI Options**: Shared clap option groups with environment fallbacks

pub mod cli;
pub mod discovery;
pub mod error;
pub mod protocol;

pub mod test_utils;

// Re-export commonly used types for convenience
pub use cli::{DiscoveryOptions, LoggingOptions};
pub use discovery::{ClientConfig, HttpClient, RemoteService, ServiceRegistry};
pub use error::{MicrohelloError, Result};
