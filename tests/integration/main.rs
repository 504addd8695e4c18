//! Integration tests for the CI/CD practice service.
//!
//! Each test binds the real server on an ephemeral loopback port and talks to
//! it over HTTP.
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use cicd_practice::config::Config;
use cicd_practice::{add, create_router, multiply, server};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running server plus the handle used to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<cicd_practice::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let config = Config::default().with_overrides(Some("127.0.0.1".to_string()), Some(0));
        let listener = server::bind(&config).await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server::run(listener, create_router(), async move {
            rx.await.ok();
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("join").expect("server exited cleanly");
    }
}

#[tokio::test]
async fn test_all_endpoints_accessible() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for endpoint in ["/", "/health", "/api/status", "/api/version"] {
        let response = client.get(server.url(endpoint)).send().await.unwrap();
        assert_eq!(response.status(), 200, "Failed for endpoint: {endpoint}");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_home_page_and_status_scenario() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let page = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("CI/CD Practice Application"));

    let status: Value = client
        .get(server.url("/api/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["application"], "CI/CD Practice App");
    assert_eq!(status["version"], "1.0.0");

    server.stop().await;
}

#[tokio::test]
async fn test_json_responses_valid() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for endpoint in ["/health", "/api/status", "/api/version"] {
        let response = client.get(server.url(endpoint)).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let data: Value = response.json().await.unwrap();
        assert!(data.is_object(), "Invalid JSON response from {endpoint}");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_health_checks() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let before = Utc::now();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = server.url("/health");
        async move { client.get(url).send().await?.json::<Value>().await }
    });
    let results = futures::future::join_all(requests).await;

    for result in results {
        let data = result.unwrap();
        assert_eq!(data["status"], "healthy");
        let stamped = DateTime::parse_from_rfc3339(data["timestamp"].as_str().unwrap()).unwrap();
        assert!(stamped >= before);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_sequential_health_timestamps_non_decreasing() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut last: Option<DateTime<chrono::FixedOffset>> = None;
    for _ in 0..5 {
        let data: Value = client
            .get(server.url("/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let stamped = DateTime::parse_from_rfc3339(data["timestamp"].as_str().unwrap()).unwrap();
        if let Some(previous) = last {
            assert!(stamped >= previous);
        }
        last = Some(stamped);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_openapi_schema() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let schema: Value = client
        .get(server.url("/openapi.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(schema.get("openapi").is_some());
    assert_eq!(schema["info"]["title"], "CI/CD Practice API");

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::start().await;
    let response = reqwest::get(server.url("/nope")).await.unwrap();
    assert_eq!(response.status(), 404);

    server.stop().await;
}

#[test]
fn test_arithmetic_helpers() {
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(10, -5), 5);
    assert_eq!(multiply(-2, -3), 6);
    assert_eq!(multiply(0, 5), 0);
}
