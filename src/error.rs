//! Unified error types for the service process.
//!
//! Request handlers are infallible; these errors only arise while loading
//! configuration and running the listener.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (socket bind, accept loop).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
