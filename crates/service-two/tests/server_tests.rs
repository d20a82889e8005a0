//! Server Integration Tests
//!
//! Tests for the callee service HTTP endpoints against a live server
//! bound to an OS-assigned port.

use microhello_service_two::{ServiceTwoConfig, ServiceTwoServer};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Starts the service on an OS-assigned port, returns its address and
/// the shutdown sender keeping the accept loop stoppable.
async fn start_service() -> (SocketAddr, oneshot::Sender<()>) {
    let config = ServiceTwoConfig {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        ..Default::default()
    };

    let mut server = ServiceTwoServer::bind(config).await.unwrap();
    let addr = server.local_addr();
    let shutdown = server.shutdown_handle().unwrap();

    tokio::spawn(server.run());

    (addr, shutdown)
}

#[tokio::test]
async fn test_hello_returns_exact_greeting() {
    let (addr, _shutdown) = start_service().await;

    let response = reqwest::get(format!("http://{}/api/v1/hello", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/plain"
    );
    assert_eq!(response.text().await.unwrap(), "Hello World from Service2");
}

#[tokio::test]
async fn test_hello_ignores_query_parameters_and_headers() {
    let (addr, _shutdown) = start_service().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/v1/hello?name=ignored&x=1", addr))
        .header("x-custom-header", "ignored")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Hello World from Service2");
}

#[tokio::test]
async fn test_hello_is_idempotent() {
    let (addr, _shutdown) = start_service().await;

    let url = format!("http://{}/api/v1/hello", addr);
    for _ in 0..5 {
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "Hello World from Service2");
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let (addr, _shutdown) = start_service().await;

    let response = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "service-two");
}

#[tokio::test]
async fn test_unknown_path_returns_not_found() {
    let (addr, _shutdown) = start_service().await;

    let response = reqwest::get(format!("http://{}/api/v1/unknown", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_non_get_method_returns_not_found() {
    let (addr, _shutdown) = start_service().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/v1/hello", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_concurrent_requests_get_independent_responses() {
    let (addr, _shutdown) = start_service().await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/api/v1/hello", addr);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let client = client.clone();
        let url = url.clone();
        tasks.spawn(async move {
            let response = client.get(&url).send().await.unwrap();
            (response.status().as_u16(), response.text().await.unwrap())
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, "Hello World from Service2");
        completed += 1;
    }

    assert_eq!(completed, 100);
}

#[tokio::test]
async fn test_shutdown_stops_accept_loop() {
    let (addr, shutdown) = start_service().await;

    // Server answers before shutdown
    let response = reqwest::get(format!("http://{}/api/v1/hello", addr))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    shutdown.send(()).unwrap();

    // Give the accept loop a moment to wind down, then new connections fail
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let result = reqwest::get(format!("http://{}/api/v1/hello", addr)).await;
    assert!(result.is_err());
}
