/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. The
 * `FromRef` implementations let handlers extract only the parts they use,
 * e.g. `State(store): State<SharedStore>`.
 *
 * The connection registry is created here and lives as long as the router;
 * the broadcaster holds a second `Arc` to the same registry.
 */
use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::auth::{PasswordHasher, TokenService};
use crate::backend::integrations::{SuggestionClient, WebhookNotifier};
use crate::backend::realtime::{Broadcaster, ConnectionRegistry, SocketSettings};
use crate::backend::store::SharedStore;
use crate::shared::AppConfig;

/// Timeout applied to outbound HTTP calls
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    /// Table store (PostgreSQL or in-memory)
    pub store: SharedStore,
    /// Live WebSocket connections
    pub registry: Arc<ConnectionRegistry>,
    /// Fanout over `registry`
    pub broadcaster: Broadcaster,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
    pub webhook: WebhookNotifier,
    pub suggestions: SuggestionClient,
    pub socket: SocketSettings,
}

impl AppState {
    /// Build the state for a configuration and an already opened store
    pub fn new(config: &AppConfig, store: SharedStore) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(OUTBOUND_TIMEOUT).build()?;
        let registry = Arc::new(ConnectionRegistry::new());

        Ok(Self {
            store,
            broadcaster: Broadcaster::new(Arc::clone(&registry)),
            registry,
            tokens: TokenService::new(&config.jwt_secret),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            webhook: WebhookNotifier::new(http.clone(), config.webhook_url.clone()),
            suggestions: SuggestionClient::new(
                http,
                config.google_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base.clone(),
            ),
            socket: SocketSettings {
                idle_timeout: config.ws_idle_timeout,
            },
        })
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<ConnectionRegistry> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry.clone()
    }
}

impl FromRef<AppState> for Broadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcaster.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}

impl FromRef<AppState> for WebhookNotifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.webhook.clone()
    }
}

impl FromRef<AppState> for SuggestionClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.suggestions.clone()
    }
}

impl FromRef<AppState> for SocketSettings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.socket
    }
}
