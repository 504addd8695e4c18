//! Listener setup and the serve loop.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Bind a TCP listener on the configured host and port.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
