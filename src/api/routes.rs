//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{api_status, api_version, health, home};
use super::openapi::openapi;
use crate::metrics::track_http_metrics;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Create the application router.
///
/// Unmatched paths and methods fall through to axum's 404/405 responses;
/// those are still counted by the metrics middleware.
pub fn create_router() -> Router {
    Router::new()
        // Frontend
        .route("/", get(home))
        // Health endpoint
        .route("/health", get(health))
        // API endpoints
        .route("/api/status", get(api_status))
        .route("/api/version", get(api_version))
        .merge(docs_router())
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
}

/// API documentation: the OpenAPI document, Swagger UI under `/docs` and
/// ReDoc under `/redoc`.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, openapi().clone()))
        .merge(Redoc::with_url("/redoc", openapi().clone()))
}
