//! Server Integration Tests
//!
//! Tests for the caller service against a live service two instance,
//! covering the forwarded round trip and the failure paths when the
//! remote service is unreachable or unresolvable.

use microhello_service_one::{ServiceOneConfig, ServiceOneServer};
use microhello_service_two::{ServiceTwoConfig, ServiceTwoServer};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Starts a real service two on an OS-assigned port
async fn start_service_two() -> (SocketAddr, oneshot::Sender<()>) {
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

/// Starts service one with the given service map on an OS-assigned port
async fn start_service_one(service_map: String) -> (SocketAddr, oneshot::Sender<()>) {
    let config = ServiceOneConfig {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        service_map,
        ..Default::default()
    };

    let mut server = ServiceOneServer::bind(config).await.unwrap();
    let addr = server.local_addr();
    let shutdown = server.shutdown_handle().unwrap();

    tokio::spawn(server.run());

    (addr, shutdown)
}

#[tokio::test]
async fn test_hello_returns_exact_greeting() {
    let (addr, _shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:8081".to_string()).await;

    let response = reqwest::get(format!("http://{}/api/v1/hello", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/plain"
    );
    assert_eq!(response.text().await.unwrap(), "Hello World from Service1");
}

#[tokio::test]
async fn test_hello_ignores_query_parameters_and_headers() {
    let (addr, _shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:8081".to_string()).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/v1/hello?debug=true", addr))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Hello World from Service1");
}

#[tokio::test]
async fn test_forward_round_trip_matches_direct_call() {
    let (two_addr, _two_shutdown) = start_service_two().await;
    let (one_addr, _one_shutdown) =
        start_service_one(format!("micro-service2=http://{}", two_addr)).await;

    let direct = reqwest::get(format!("http://{}/api/v1/hello", two_addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let forwarded = reqwest::get(format!("http://{}/api/v1/to/service2", one_addr))
        .await
        .unwrap();

    assert_eq!(forwarded.status().as_u16(), 200);
    let forwarded_body = forwarded.text().await.unwrap();

    assert_eq!(forwarded_body, "Hello World from Service2");
    assert_eq!(forwarded_body, direct);
}

#[tokio::test]
async fn test_forward_is_idempotent() {
    let (two_addr, _two_shutdown) = start_service_two().await;
    let (one_addr, _one_shutdown) =
        start_service_one(format!("micro-service2=http://{}", two_addr)).await;

    let url = format!("http://{}/api/v1/to/service2", one_addr);
    for _ in 0..5 {
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "Hello World from Service2");
    }
}

#[tokio::test]
async fn test_forward_unreachable_upstream_returns_server_error() {
    // Port 9 (discard) is not listening in the test environment
    let (one_addr, _one_shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:9".to_string()).await;

    let response = reqwest::get(format!("http://{}/api/v1/to/service2", one_addr))
        .await
        .unwrap();

    assert!(response.status().is_server_error());

    // The process keeps serving after the failed remote call
    let hello = reqwest::get(format!("http://{}/api/v1/hello", one_addr))
        .await
        .unwrap();
    assert_eq!(hello.status().as_u16(), 200);
    assert_eq!(hello.text().await.unwrap(), "Hello World from Service1");
}

#[tokio::test]
async fn test_forward_unresolvable_name_returns_server_error() {
    // The registry has entries, but none for the configured upstream name
    let (one_addr, _one_shutdown) =
        start_service_one("billing=http://127.0.0.1:9000".to_string()).await;

    let response = reqwest::get(format!("http://{}/api/v1/to/service2", one_addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn test_forward_failure_then_recovery() {
    let (one_addr, _one_shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:9".to_string()).await;

    // Remote is down: server error, but no crash
    let failed = reqwest::get(format!("http://{}/api/v1/to/service2", one_addr))
        .await
        .unwrap();
    assert!(failed.status().is_server_error());

    // Repeated failures behave the same way
    let failed_again = reqwest::get(format!("http://{}/api/v1/to/service2", one_addr))
        .await
        .unwrap();
    assert!(failed_again.status().is_server_error());
}

#[tokio::test]
async fn test_health_endpoint() {
    let (addr, _shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:8081".to_string()).await;

    let response = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "service-one");
}

#[tokio::test]
async fn test_unknown_path_returns_not_found() {
    let (addr, _shutdown) =
        start_service_one("micro-service2=http://127.0.0.1:8081".to_string()).await;

    let response = reqwest::get(format!("http://{}/api/v2/hello", addr))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_concurrent_requests_get_independent_responses() {
    let (two_addr, _two_shutdown) = start_service_two().await;
    let (one_addr, _one_shutdown) =
        start_service_one(format!("micro-service2=http://{}", two_addr)).await;

    let client = reqwest::Client::new();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..100 {
        let client = client.clone();
        // Alternate between the local greeting and the forwarded one
        let url = if i % 2 == 0 {
            format!("http://{}/api/v1/hello", one_addr)
        } else {
            format!("http://{}/api/v1/to/service2", one_addr)
        };
        let expected = if i % 2 == 0 {
            "Hello World from Service1"
        } else {
            "Hello World from Service2"
        };

        tasks.spawn(async move {
            let response = client.get(&url).send().await.unwrap();
            let status = response.status().as_u16();
            let body = response.text().await.unwrap();
            (status, body, expected)
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (status, body, expected) = result.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, expected);
        completed += 1;
    }

    assert_eq!(completed, 100);
}
