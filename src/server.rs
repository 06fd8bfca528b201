use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use heavyweight_config::Settings;

use crate::router::init_router;
use crate::state::init_app_state;

/// Serves the API until a shutdown signal arrives, then closes the pool.
pub async fn run(settings: Arc<Settings>) -> anyhow::Result<()> {
    let state = init_app_state(Arc::clone(&settings))?;
    let app = init_router(state.clone());

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;

    info!(
        address = %address,
        blocking_threads = settings.blocking_threads,
        "Starting server..."
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down server...");
    state.db.close().await;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received SIGTERM signal"),
    }
}
