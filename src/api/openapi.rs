//! OpenAPI document describing the public routes.

use once_cell::sync::Lazy;
use utoipa::OpenApi;

use super::handlers::{HealthResponse, HealthStatus, StatusResponse, VersionResponse};

/// OpenAPI document generated from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::home,
        super::handlers::health,
        super::handlers::api_status,
        super::handlers::api_version,
    ),
    components(schemas(HealthResponse, HealthStatus, StatusResponse, VersionResponse)),
    tags(
        (name = "Frontend", description = "HTML pages"),
        (name = "Health", description = "Service health monitoring"),
        (name = "API", description = "Application status and version")
    ),
    info(
        title = "CI/CD Practice API",
        description = "Axum application for practising GitHub Actions CI/CD pipelines",
        contact(name = "CI/CD Practice", url = "https://github.com/brightalot/cicd")
    )
)]
pub struct ApiDoc;

/// Generated once; the route set never changes after startup.
static OPENAPI: Lazy<utoipa::openapi::OpenApi> = Lazy::new(ApiDoc::openapi);

/// The OpenAPI document for this service.
pub fn openapi() -> &'static utoipa::openapi::OpenApi {
    &OPENAPI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = openapi();
        for path in ["/", "/health", "/api/status", "/api/version"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn document_info_matches_application() {
        let doc = openapi();
        assert_eq!(doc.info.title, crate::app_info::API_TITLE);
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn version_schema_exposes_wire_field_name() {
        let json = serde_json::to_value(openapi()).unwrap();
        let props = &json["components"]["schemas"]["VersionResponse"]["properties"];
        assert!(props.get("python_version").is_some());
        assert!(props.get("language_version").is_none());
    }
}
