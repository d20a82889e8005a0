//! # Microhello Service One
//!
//! Caller service for the microhello pair. Answers its own greeting
//! endpoint and forwards to service two through a typed client resolved
//! by logical name.
//!
//! ## Endpoints
//!
//! - `GET /api/v1/hello` - fixed greeting
//! - `GET /api/v1/to/service2` - service two's greeting, forwarded verbatim
//! - `GET /health` - health check

pub mod cli_options;
pub mod client;
pub mod config;
pub mod server;

pub use cli_options::ServiceOneCliOptions;
pub use config::ServiceOneConfig;
pub use server::ServiceOneServer;
