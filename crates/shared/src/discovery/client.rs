//! Pooled HTTP client for outbound service-to-service calls
//!
//! This module provides the single reusable HTTP client each service
//! process constructs at startup. The client holds no per-request state
//! and is safe to share across concurrent request handler tasks; the
//! underlying connection pool takes care of connection reuse.
//!
//! ## Features
//!
//! - **Connection Pooling**: Efficient HTTP connection reuse
//! - **Timeout Management**: Every request runs under a bounded deadline
//! - **Error Handling**: Failures map onto [`MicrohelloError`] variants

use crate::error::{MicrohelloError, Result};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client configuration for outbound calls
///
/// # Performance Tuning
///
/// - `request_timeout`: Balance between reliability and responsiveness
/// - `max_idle_per_host`: Tune for expected call volume per remote service
/// - `pool_idle_timeout`: Balance memory vs connection reuse
///
/// # Examples
///
/// ```rust
/// use microhello_shared::discovery::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new(Duration::from_secs(5));
/// assert_eq!(config.request_timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout for individual HTTP requests
    pub request_timeout: Duration,

    /// Maximum number of idle pooled connections per remote host
    pub max_idle_per_host: usize,

    /// How long to keep idle connections in the pool
    pub pool_idle_timeout: Duration,
}

impl ClientConfig {
    /// Creates a new client configuration with the specified timeout
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl Default for ClientConfig {
    /// Creates a default configuration suitable for local deployments
    ///
    /// # Default Values
    ///
    /// - Request timeout: 5 seconds
    /// - Max idle connections per host: 32
    /// - Pool idle timeout: 90 seconds
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

/// Reusable HTTP client for calls to remote services
///
/// # Thread Safety
///
/// The client is fully thread-safe and intended to be constructed once at
/// process start, then shared across async tasks. Cloning is cheap; clones
/// share the same connection pool.
///
/// # Examples
///
/// ```rust
/// use microhello_shared::discovery::HttpClient;
/// use std::time::Duration;
///
/// let client = HttpClient::new(Duration::from_secs(5));
/// assert_eq!(client.config().request_timeout, Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// Hyper HTTP client with connection pooling
    client: Client<HttpConnector, Full<Bytes>>,

    /// Client configuration
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified request timeout
    pub fn new(request_timeout: Duration) -> Self {
        Self::with_config(ClientConfig::new(request_timeout))
    }

    /// Creates a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let connector = HttpConnector::new();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build(connector);

        Self { client, config }
    }

    /// Performs a GET request and returns the response body as a string
    ///
    /// The request runs under the configured timeout. A non-success status
    /// from the remote service is treated as a failure and propagated to
    /// the caller with the remote status attached; no retries are
    /// attempted.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    ///
    /// # Errors
    ///
    /// - [`MicrohelloError::Timeout`] when the deadline is exceeded
    /// - [`MicrohelloError::Network`] on connection failures
    /// - [`MicrohelloError::Upstream`] on non-2xx responses
    #[instrument(skip(self), fields(url = url))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url = url, "Sending GET request");

        let request = Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Full::new(Bytes::new()))
            .map_err(|e| {
                MicrohelloError::network(
                    url,
                    format!("Failed to build HTTP request: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        let response = tokio::time::timeout(self.config.request_timeout, self.client.request(request))
            .await
            .map_err(|_| {
                MicrohelloError::timeout(self.config.request_timeout, format!("GET {}", url))
            })?
            .map_err(|e| {
                MicrohelloError::network(
                    url,
                    format!("HTTP request failed: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = url, status = %status, "GET request failed with HTTP error");
            return Err(MicrohelloError::upstream(
                url,
                status.as_u16(),
                status
                    .canonical_reason()
                    .unwrap_or("HTTP error")
                    .to_string(),
            ));
        }

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| {
                MicrohelloError::network(
                    url,
                    format!("Failed to read response body: {}", e),
                    Some(Box::new(e)),
                )
            })?
            .to_bytes();

        let body = String::from_utf8(body_bytes.to_vec()).map_err(|e| {
            MicrohelloError::internal(
                format!("Response body from {} is not valid UTF-8", url),
                Some(Box::new(e)),
            )
        })?;

        debug!(url = url, body_len = body.len(), "GET request completed");

        Ok(body)
    }

    /// Returns the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("client", &"<HyperClient>")
            .finish()
    }
}
