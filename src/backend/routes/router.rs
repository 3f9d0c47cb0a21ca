/**
 * Router Configuration
 *
 * Combines the status route, the WebSocket endpoint and the API routes,
 * then adds CORS (any origin, method and header) and request tracing.
 */
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::realtime::{ws_handler, ConnectionRegistry};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler));

    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /
async fn root(State(registry): State<Arc<ConnectionRegistry>>) -> Json<Value> {
    Json(json!({
        "message": "Q&A Dashboard API",
        "status": "running",
        "connections": registry.len(),
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Not Found", "status": 404})),
    )
}
