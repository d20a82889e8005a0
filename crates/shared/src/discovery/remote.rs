//! Remote service handle combining name resolution and HTTP transport
//!
//! A [`RemoteService`] is the callable stand-in for a remote HTTP service:
//! it owns the logical name, resolves it through the [`ServiceRegistry`] on
//! every call, and performs the request through the shared [`HttpClient`].
//! Service crates wrap it in small typed clients exposing one method per
//! remote operation, which keeps handler code free of addresses and URLs.

use super::client::HttpClient;
use super::registry::ServiceRegistry;
use crate::error::{MicrohelloError, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Handle for calling one remote service by logical name
///
/// # Thread Safety
///
/// The handle is cheap to clone and safe to share across request handler
/// tasks; the registry is immutable and the HTTP client pools connections
/// internally.
///
/// # Examples
///
/// ```rust
/// use microhello_shared::discovery::{HttpClient, RemoteService, ServiceRegistry};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let registry = Arc::new(
///     ServiceRegistry::from_spec("micro-service2=http://127.0.0.1:8081").unwrap(),
/// );
/// let client = HttpClient::new(Duration::from_secs(5));
/// let remote = RemoteService::new("micro-service2", registry, client);
/// assert_eq!(remote.name(), "micro-service2");
/// ```
#[derive(Debug, Clone)]
pub struct RemoteService {
    /// Logical name of the remote service
    name: String,

    /// Registry used to resolve the name on each call
    registry: Arc<ServiceRegistry>,

    /// Shared HTTP client performing the actual requests
    client: HttpClient,
}

impl RemoteService {
    /// Creates a handle for the named remote service
    ///
    /// # Arguments
    ///
    /// * `name` - Logical service name resolved at call time
    /// * `registry` - Registry mapping names to base URLs
    /// * `client` - Shared HTTP client for outbound requests
    pub fn new(name: impl Into<String>, registry: Arc<ServiceRegistry>, client: HttpClient) -> Self {
        Self {
            name: name.into(),
            registry,
            client,
        }
    }

    /// Returns the logical name of the remote service
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Performs a GET against the remote service and returns the body
    ///
    /// The logical name is resolved through the registry on every call, so
    /// registry misconfiguration surfaces here rather than at construction.
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute request path, e.g. `"/api/v1/hello"`
    ///
    /// # Errors
    ///
    /// - [`MicrohelloError::ServiceNotFound`] when the name has no registry entry
    /// - Transport errors propagated from the underlying [`HttpClient`]
    #[instrument(skip(self), fields(service = %self.name, path = path))]
    pub async fn get(&self, path: &str) -> Result<String> {
        let base_url = self.registry.resolve(&self.name)?;

        let url = base_url.join(path).map_err(|e| {
            MicrohelloError::internal(
                format!("Failed to join '{}' onto base URL '{}'", path, base_url),
                Some(Box::new(e)),
            )
        })?;

        debug!(service = %self.name, url = %url, "Calling remote service");

        self.client.get_text(url.as_str()).await
    }
}
