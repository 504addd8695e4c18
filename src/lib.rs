//! CI/CD practice web service.
//!
//! A small Axum service serving a landing page, a health check and two
//! static JSON endpoints, plus two arithmetic helpers for the test suite.
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | HTML landing page |
//! | GET | `/health` | [`api::HealthResponse`] |
//! | GET | `/api/status` | [`api::StatusResponse`] |
//! | GET | `/api/version` | [`api::VersionResponse`] |
//! | GET | `/openapi.json`, `/docs`, `/redoc` | API documentation |
//!
//! # Modules
//!
//! - [`api`]: Response records, route table, OpenAPI document
//! - [`app_info`]: Static application metadata
//! - [`calc`]: Arithmetic helpers
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`html`]: Static HTML documents
//! - [`metrics`]: Request metrics
//! - [`server`]: Listener and serve loop

pub mod api;
pub mod app_info;
pub mod calc;
pub mod config;
pub mod error;
pub mod html;
pub mod metrics;
pub mod server;

pub use api::create_router;
pub use calc::{add, multiply};
pub use config::Config;
pub use error::{AppError, Result};
