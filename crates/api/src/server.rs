//! Serve loop with graceful shutdown.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::{Result, ServerError};

/// Serves `app` on an already-bound `listener` until `shutdown` resolves,
/// then waits for in-flight requests to finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
