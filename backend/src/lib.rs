pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod geo;
pub mod models;
pub mod params;
pub mod routes;
pub mod sentiment;
pub mod store;
pub mod trend;

use crate::config::AppConfig;
use crate::db::PgPostStore;
use crate::sentiment::{FixedSentiment, SentimentAnalyzer};
use crate::store::PostStore;
use anyhow::Context;
use axum::extract::FromRef;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

impl FromRef<AppState> for Arc<dyn PostStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn SentimentAnalyzer> {
    fn from_ref(state: &AppState) -> Self {
        state.sentiment.clone()
    }
}

/// Connects to the store, then serves until Ctrl+C or SIGTERM.
pub async fn start_server() -> anyhow::Result<()> {
    let settings = AppConfig::load().context("Failed to load configuration")?;

    // No store, no service.
    let pool = db::setup_database(&settings)
        .await
        .context("Failed to connect to the database")?;
    info!("Connected to the database");

    let store: Arc<dyn PostStore> = Arc::new(PgPostStore::new(pool));
    let state = AppState {
        store: store.clone(),
        sentiment: Arc::new(FixedSentiment),
    };
    let app = routes::create_router(state, &settings.static_dir);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    info!("Server is running on http://{}", settings.server_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    close_after(store.as_ref(), served)
        .await
        .context("Server error")
}

/// Closes the store whatever the server's outcome, then hands the outcome back.
async fn close_after<T, E>(store: &dyn PostStore, served: Result<T, E>) -> Result<T, E> {
    store.close().await;
    info!("Server stopped");
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
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
}
