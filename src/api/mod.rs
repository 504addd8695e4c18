//! HTTP API module: response records, route table and OpenAPI document.

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::{HealthResponse, HealthStatus, StatusResponse, VersionResponse};
pub use openapi::ApiDoc;
pub use routes::create_router;
