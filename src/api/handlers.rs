//! HTTP API handlers and the response records they serve.
//!
//! Handlers take no input and cannot fail. They are `async` only because
//! axum requires it; none of them awaits anything.

use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::app_info::{APP_NAME, APP_VERSION, ENVIRONMENT, FRAMEWORK};
use crate::html;

/// Build identifier reported by the version endpoint.
pub const BUILD: &str = "initial";

/// Features advertised by the status endpoint, in display order.
pub const FEATURES: [&str; 5] = [
    "Health Check",
    "Auto-generated API docs",
    "Type validation",
    "Async support",
    "CI/CD Ready",
];

/// Possible health states. The service only ever reports itself healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: HealthStatus,
    pub message: String,
    /// Instant the check ran, RFC 3339 in UTC.
    #[schema(example = "2025-01-01T12:00:00.000000000Z")]
    pub timestamp: String,
}

impl HealthResponse {
    /// Healthy response stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: format!("{FRAMEWORK} application is running smoothly!"),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }
}

/// Application status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "CI/CD Practice App")]
    pub application: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "development")]
    pub environment: String,
    /// Never empty.
    pub features: Vec<String>,
}

impl StatusResponse {
    /// Status of the running application.
    pub fn current() -> Self {
        Self {
            application: APP_NAME.to_string(),
            status: "running".to_string(),
            version: APP_VERSION.to_string(),
            environment: ENVIRONMENT.to_string(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Version information response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "initial")]
    pub build: String,
    /// Toolchain version. Serialized as `python_version` for wire compatibility.
    #[serde(rename = "python_version")]
    #[schema(example = "1.75+")]
    pub language_version: String,
    #[schema(example = "Axum")]
    pub framework: String,
}

impl VersionResponse {
    /// Version of this build.
    pub fn current() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            build: BUILD.to_string(),
            language_version: concat!(env!("CARGO_PKG_RUST_VERSION"), "+").to_string(),
            framework: FRAMEWORK.to_string(),
        }
    }
}

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    tag = "Frontend",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    )
)]
pub async fn home() -> impl IntoResponse {
    Html(html::home_page())
}

/// Health check endpoint - always returns 200.
///
/// Used by load balancers and monitoring to confirm the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Application status, environment and supported features.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "API",
    responses(
        (status = 200, description = "Application status", body = StatusResponse)
    )
)]
pub async fn api_status() -> Json<StatusResponse> {
    Json(StatusResponse::current())
}

/// Version and build information.
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "API",
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    )
)]
pub async fn api_version() -> Json<VersionResponse> {
    Json(VersionResponse::current())
}
