//! HTTP server for the caller service
//!
//! Serves the greeting endpoint, the forwarding endpoint, and a health
//! check. The forwarding endpoint suspends on the outbound call and
//! returns the remote body verbatim; a remote failure maps onto a server
//! error response without taking the process down.

use crate::client::ServiceTwoClient;
use crate::ServiceOneConfig;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use microhello_shared::protocol::{content_types, headers, paths};
use microhello_shared::{HttpClient, MicrohelloError, RemoteService, Result, ServiceRegistry};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

/// Fixed greeting returned by the hello endpoint
///
/// The body is a stable literal independent of request content.
const GREETING: &str = "Hello World from Service1";

/// HTTP server for the caller service
///
/// Binds its listener eagerly so the OS-assigned port is known before the
/// accept loop starts (tests bind port 0 and read it back). The registry
/// and the pooled HTTP client are constructed once here and shared across
/// request handler tasks; no other state is shared between requests.
#[derive(Debug)]
pub struct ServiceOneServer {
    /// Validated service configuration
    config: Arc<ServiceOneConfig>,
    /// Bound TCP listener for incoming connections
    listener: TcpListener,
    /// Local address where the server is listening
    local_addr: SocketAddr,
    /// Request handler shared across connection tasks
    handler: Arc<HttpHandler>,
    /// Shutdown signal sender handed out via [`Self::shutdown_handle`]
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Shutdown signal receiver consumed by the accept loop
    shutdown_rx: oneshot::Receiver<()>,
}

impl ServiceOneServer {
    /// Creates a server bound to the configured listen address
    ///
    /// Builds the service registry from configuration and the single
    /// reusable HTTP client that all outbound calls share.
    ///
    /// # Arguments
    ///
    /// * `config` - Service configuration (re-validated here)
    ///
    /// # Errors
    ///
    /// Returns an error when validation fails, the service map cannot be
    /// parsed, or the address cannot be bound.
    #[instrument(skip(config))]
    pub async fn bind(config: ServiceOneConfig) -> Result<Self> {
        let config = ServiceOneConfig::new(config)?;

        let registry = Arc::new(ServiceRegistry::from_spec(&config.service_map)?);
        let http_client = HttpClient::new(config.request_timeout);
        let service_two = ServiceTwoClient::new(RemoteService::new(
            config.upstream_name.clone(),
            registry,
            http_client,
        ));

        let listener = TcpListener::bind(config.listen_addr).await?;
        let local_addr = listener.local_addr()?;

        info!(
            local_addr = %local_addr,
            upstream = %config.upstream_name,
            "Service one server initialized"
        );

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        Ok(Self {
            config: Arc::new(config),
            listener,
            local_addr,
            handler: Arc::new(HttpHandler::new(service_two)),
            shutdown_tx: Some(shutdown_tx),
            shutdown_rx,
        })
    }

    /// Returns the local address where the server is listening
    ///
    /// For servers configured with port 0 this is the OS-assigned port.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns a reference to the server configuration
    pub fn config(&self) -> &ServiceOneConfig {
        &self.config
    }

    /// Takes the shutdown sender for external shutdown coordination
    ///
    /// Returns `None` if the handle was already taken. Sending on the
    /// returned channel stops the accept loop; in-flight connections run
    /// to completion on their own tasks.
    pub fn shutdown_handle(&mut self) -> Option<oneshot::Sender<()>> {
        self.shutdown_tx.take()
    }

    /// Runs the accept loop until shutdown
    ///
    /// Each accepted connection is served on its own task, so a slow
    /// client or a stalled outbound call never blocks the loop. Returns
    /// when the shutdown channel fires or the process receives ctrl-c.
    #[instrument(skip(self), fields(listen_addr = %self.local_addr))]
    pub async fn run(self) -> Result<()> {
        info!(listen_addr = %self.local_addr, "Service one listening");

        let listener = self.listener;
        let handler = self.handler;
        let mut shutdown_rx = self.shutdown_rx;

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer_addr)) => {
                            Self::serve_connection(stream, peer_addr, Arc::clone(&handler));
                        }
                        Err(e) => {
                            warn!(error = %e, "Failed to accept connection");
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = &mut ctrl_c => {
                    info!("Interrupt signal received, shutting down");
                    break;
                }
            }
        }

        info!("Service one server stopped");
        Ok(())
    }

    /// Spawns a task serving one HTTP/1.1 connection
    fn serve_connection(
        stream: tokio::net::TcpStream,
        peer_addr: SocketAddr,
        handler: Arc<HttpHandler>,
    ) {
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| {
                let handler = Arc::clone(&handler);
                async move { Ok::<_, Infallible>(handler.handle_request(req).await) }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                debug!(peer = %peer_addr, error = %e, "Connection closed with error");
            }
        });
    }
}

/// Request handler routing incoming requests to endpoint handlers
///
/// Holds the typed client for service two; otherwise stateless. Shared
/// across all connection tasks behind an `Arc`.
#[derive(Debug)]
pub(crate) struct HttpHandler {
    /// Client for the remote greeting endpoint
    service_two: ServiceTwoClient,
}

impl HttpHandler {
    pub(crate) fn new(service_two: ServiceTwoClient) -> Self {
        Self { service_two }
    }

    /// Routes and handles one HTTP request
    ///
    /// # Supported Endpoints
    ///
    /// - `GET /api/v1/hello` - fixed greeting, `text/plain`
    /// - `GET /api/v1/to/service2` - remote greeting forwarded verbatim
    /// - `GET /health` - health check, `application/json`
    #[instrument(skip(self, req), fields(method = %req.method(), path = req.uri().path()))]
    pub(crate) async fn handle_request(&self, req: Request<Incoming>) -> Response<Full<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path();

        let response = if method == Method::GET && path == paths::HELLO {
            self.handle_hello()
        } else if method == Method::GET && path == paths::TO_SERVICE2 {
            self.handle_forward().await
        } else if method == Method::GET && path == paths::HEALTH {
            self.handle_health()
        } else {
            debug!(method = %method, path = path, "Request to unknown endpoint");
            text_response(StatusCode::NOT_FOUND, "Not Found")
        };

        debug!(status = response.status().as_u16(), "Request completed");

        response
    }

    /// Handles the greeting endpoint
    ///
    /// Always returns the same body with status 200 regardless of query
    /// parameters, headers, or request body.
    fn handle_hello(&self) -> Response<Full<Bytes>> {
        text_response(StatusCode::OK, GREETING)
    }

    /// Handles the forwarding endpoint
    ///
    /// Calls the remote greeting endpoint through the typed client and
    /// returns the body unchanged on success. On failure the error maps
    /// onto a server error status; no retries, no fallback body.
    async fn handle_forward(&self) -> Response<Full<Bytes>> {
        match self.service_two.hello().await {
            Ok(body) => text_response(StatusCode::OK, body),
            Err(e) => {
                warn!(
                    service = self.service_two.service_name(),
                    error = %e,
                    temporary = e.is_temporary(),
                    "Remote hello call failed"
                );
                error_response(&e)
            }
        }
    }

    /// Handles the health check endpoint
    fn handle_health(&self) -> Response<Full<Bytes>> {
        let health = serde_json::json!({
            "status": "healthy",
            "service": "service-one",
            "version": env!("CARGO_PKG_VERSION"),
        });

        json_response(StatusCode::OK, &health)
    }
}

/// Builds a plain text response
fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(headers::CONTENT_TYPE, content_types::TEXT_PLAIN)
        .body(Full::new(body.into()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

/// Builds a JSON response from a serializable value
fn json_response<T: serde::Serialize>(status: StatusCode, data: &T) -> Response<Full<Bytes>> {
    match serde_json::to_string(data) {
        Ok(json) => Response::builder()
            .status(status)
            .header(headers::CONTENT_TYPE, content_types::JSON)
            .body(Full::new(Bytes::from(json)))
            .unwrap_or_else(|_| Response::new(Full::new(Bytes::new()))),
        Err(_) => text_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize response"),
    }
}

/// Maps a remote-call failure onto an HTTP error response
///
/// The status comes from the error's HTTP mapping, so resolution and
/// transport failures all surface as 5xx responses to the original caller.
fn error_response(err: &MicrohelloError) -> Response<Full<Bytes>> {
    let status = StatusCode::from_u16(err.to_http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    text_response(status, err.to_string())
}
