//! Request metrics recorded through the `metrics` facade.
//!
//! No exporter is installed here; whichever recorder the process installs
//! receives the values, and without one every call is a no-op. Requests that
//! hit no route are counted under the `unmatched` endpoint label.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Label used for requests that matched no route.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .record(latency_ms);
}

/// Increment HTTP requests counter.
pub fn inc_http_requests(endpoint: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Route template the request matched, or `"unmatched"` for the fallback.
pub fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned())
}

/// Middleware recording count and latency per route.
///
/// Labels use the route template, never the raw request path.
pub async fn track_http_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = route_label(&req);

    let response = next.run(req).await;
    let status = response.status().as_u16();

    inc_http_requests(&endpoint, status);
    record_http_latency(start, &endpoint, status);

    response
}
