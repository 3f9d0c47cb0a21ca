/**
 * Error Conversion
 *
 * Error responses are JSON:
 * ```json
 * {
 *   "detail": "Question not found",
 *   "status": 404
 * }
 * ```
 */
use crate::backend::error::types::BackendError;
use axum::{
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", message);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", message);
        }

        let body = serde_json::json!({
            "detail": message,
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
