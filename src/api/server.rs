//! Portal server lifecycle: starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::portal_router;
use crate::api::types::ApiContext;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind portal server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(std::io::Error),
}

/// Handle to a running portal server.
pub struct PortalServer {
    pub addr: SocketAddr,
    pub started_at: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PortalServer {
    /// Ask the server to stop accepting connections.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Portal server shutdown signal sent");
        }
    }

    /// Waits until the server task has exited.
    pub async fn stopped(self) {
        if let Err(e) = self.task.await {
            tracing::error!("Portal server task failed: {e}");
        }
    }
}

/// Start the portal server.
///
/// Binds `addr` (port 0 picks an ephemeral port), builds `portal_router`
/// and spawns the axum server in a background tokio task.
pub async fn start_portal_server(
    addr: SocketAddr,
    ctx: ApiContext,
) -> Result<PortalServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = portal_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Portal server received shutdown signal");
        };

        tracing::info!(%addr, "Portal server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Portal server error: {e}");
        }

        tracing::info!("Portal server stopped");
    });

    Ok(PortalServer {
        addr,
        started_at: chrono::Utc::now().to_rfc3339(),
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
