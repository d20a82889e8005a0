//! # Microhello Service Two
//!
//! Callee service for the microhello pair. Answers the greeting endpoint
//! with a fixed body and makes no outbound calls.
//!
//! ## Endpoints
//!
//! - `GET /api/v1/hello` - fixed greeting
//! - `GET /health` - health check

pub mod cli_options;
pub mod config;
pub mod server;

pub use cli_options::ServiceTwoCliOptions;
pub use config::ServiceTwoConfig;
pub use server::ServiceTwoServer;
