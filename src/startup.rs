use std::net::SocketAddr;
use std::sync::Arc;

use crate::adapters::MemoryTransactionStore;
use crate::config::Config;
use crate::middleware::cors::cors_layer;
use crate::{create_app, AppState};

/// Builds a fresh store, binds the listener and serves until shutdown is signalled.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::new(Arc::new(MemoryTransactionStore::new()));
    let app = create_app(state).layer(cors_layer(config.cors_allowed_origins.as_deref())?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    tracing::info!("listening on {}", server.local_addr());

    server.with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("shutdown signal received");
}
