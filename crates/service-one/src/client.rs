//! Typed client for the remote service two
//!
//! The forwarding endpoint never builds URLs or touches addresses; it
//! calls this client, which exposes one method per remote operation and
//! delegates name resolution and transport to the shared
//! [`RemoteService`] handle.

use microhello_shared::protocol::paths;
use microhello_shared::{RemoteService, Result};

/// Client for service two's greeting endpoint
///
/// # Thread Safety
///
/// Cheap to clone and safe to share across request handler tasks.
///
/// # Examples
///
/// ```rust
/// use microhello_service_one::client::ServiceTwoClient;
/// use microhello_shared::{HttpClient, RemoteService, ServiceRegistry};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let registry = Arc::new(
///     ServiceRegistry::from_spec("micro-service2=http://127.0.0.1:8081").unwrap(),
/// );
/// let remote = RemoteService::new(
///     "micro-service2",
///     registry,
///     HttpClient::new(Duration::from_secs(5)),
/// );
/// let client = ServiceTwoClient::new(remote);
/// assert_eq!(client.service_name(), "micro-service2");
/// ```
#[derive(Debug, Clone)]
pub struct ServiceTwoClient {
    remote: RemoteService,
}

impl ServiceTwoClient {
    /// Creates a client over the given remote service handle
    pub fn new(remote: RemoteService) -> Self {
        Self { remote }
    }

    /// Returns the logical name of the remote service
    pub fn service_name(&self) -> &str {
        self.remote.name()
    }

    /// Calls the remote greeting endpoint and returns its body verbatim
    ///
    /// # Errors
    ///
    /// Propagates resolution and transport failures unchanged; the caller
    /// decides how they surface.
    pub async fn hello(&self) -> Result<String> {
        self.remote.get(paths::HELLO).await
    }
}
