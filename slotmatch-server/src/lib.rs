//! Slotmatch: store user time slots over HTTP and find the ones two users share.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;

pub use config::{Config, DatabaseConfig, OverlapConfig, ServerConfig};
pub use error::{ApiError, ConfigError, StoreError};
pub use handlers::AppState;
pub use routes::create_router;
pub use store::{SlotStore, SqliteSlotStore};

use std::sync::Arc;

/// Serve the API on `config.server.bind` until ctrl-c.
pub async fn serve(config: Config, store: Arc<dyn SlotStore>) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(store, config.overlap));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
