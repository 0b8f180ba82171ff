//! Server setup and lifecycle

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::error::{NtviewError, Result};
use crate::infrastructure::CONFIG_CANDIDATES;
use crate::web::render;
use crate::web::routes::{create_router, AppState};

/// Run the viewer bound to `host:port`.
///
/// Blocks until shutdown (ctrl-c or SIGTERM).
pub async fn run(host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|err| NtviewError::Server(format!("Invalid address: {err}")))?;

    let tera = render::build_templates()?;
    let state = Arc::new(AppState {
        tera,
        candidates: CONFIG_CANDIDATES.iter().map(|c| c.to_string()).collect(),
    });
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|err| NtviewError::Server(format!("Failed to bind to {addr}: {err}")))?;

    tracing::info!(%addr, "ntview server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| NtviewError::Server(format!("Server error: {err}")))?;

    tracing::info!("ntview server stopped");
    Ok(())
}

/// Signal handler for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        },
    }
}
