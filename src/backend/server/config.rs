/**
 * Store Selection
 *
 * With `DATABASE_URL` set the PostgreSQL store is opened and migrated;
 * without it the in-memory store is used and nothing survives a restart.
 */
use crate::backend::store::{MemoryStore, PgStore, SharedStore, StoreError};
use crate::shared::AppConfig;
use std::sync::Arc;

/// Open the store described by the configuration
///
/// A configured database that cannot be reached or migrated is an error.
pub async fn load_store(config: &AppConfig) -> Result<SharedStore, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = PgStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open database: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
