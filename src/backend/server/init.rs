/**
 * Server Initialization
 *
 * `create_app` opens the store named by the configuration and builds the
 * router. `build_app` takes an already opened store, which is how the
 * integration tests run the full router against the in-memory store.
 */
use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{SharedStore, StoreError};
use crate::shared::AppConfig;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("store initialization failed: {0}")]
    Store(#[from] StoreError),

    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Create the application router from configuration
pub async fn create_app(config: AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Q&A dashboard backend");
    let store = load_store(&config).await?;
    build_app(config, store)
}

/// Create the application router over an opened store
pub fn build_app(config: AppConfig, store: SharedStore) -> Result<Router<()>, InitError> {
    let app_state = AppState::new(&config, store)?;

    if app_state.webhook.is_enabled() {
        tracing::info!("Webhook notifications enabled");
    }
    if !app_state.suggestions.is_configured() {
        tracing::warn!("GOOGLE_API_KEY not set. Answer suggestions will fail.");
    }
    if let Some(timeout) = config.ws_idle_timeout {
        tracing::info!("WebSocket idle timeout: {:?}", timeout);
    }

    let app = create_router(app_state);
    tracing::info!("Router configured");
    Ok(app)
}
