//! Static application metadata.

use serde::Serialize;

/// Human-readable application name.
pub const APP_NAME: &str = "CI/CD Practice App";

/// Title advertised by the OpenAPI document.
pub const API_TITLE: &str = "CI/CD Practice API";

/// Application version; also the crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Web framework serving the routes.
pub const FRAMEWORK: &str = "Axum";

/// Deployment environment reported by the status endpoint.
pub const ENVIRONMENT: &str = "development";

/// Short description of the service.
pub const DESCRIPTION: &str = "Axum application for practising GitHub Actions CI/CD pipelines";

/// Metadata describing the running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

/// Return the application metadata.
pub fn app_info() -> AppInfo {
    AppInfo {
        name: APP_NAME,
        version: APP_VERSION,
        description: DESCRIPTION,
        framework: FRAMEWORK,
    }
}
