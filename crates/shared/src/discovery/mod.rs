//! Service discovery for the microhello services
//!
//! Remote services are addressed by logical name rather than hardcoded
//! host:port pairs. This module provides the three pieces that make an
//! outbound call work:
//!
//! - [`ServiceRegistry`] - static map of logical names to base URLs,
//!   loaded from configuration at startup
//! - [`HttpClient`] - pooled HTTP client shared by all outbound calls
//! - [`RemoteService`] - per-service handle that resolves a name and
//!   performs the request
//!
//! A full discovery system (registration, health-driven membership) is an
//! external concern; the registry here is deliberately a static map so the
//! resolution contract (`name -> base URL`) stays the same if a live
//! registry client replaces it.

pub mod client;
pub mod registry;
pub mod remote;

pub use client::{ClientConfig, HttpClient};
pub use registry::ServiceRegistry;
pub use remote::RemoteService;
