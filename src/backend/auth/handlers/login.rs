/**
 * Login Handler
 *
 * POST /api/login
 *
 * Unknown email and wrong password both answer 401 `Invalid credentials`.
 * A password over 72 bytes answers 400 once the account is found.
 */
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::store::SharedStore;
use axum::{extract::State, response::Json};

const FAILED: &str = "Login failed";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn login(
    State(store): State<SharedStore>,
    State(tokens): State<TokenService>,
    State(passwords): State<PasswordHasher>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let request = request.validate()?;
    tracing::info!("Login attempt for email: {}", request.email);

    let user = store
        .find_user_by_email(&request.email)
        .await
        .map_err(|e| {
            tracing::error!("Login lookup failed: {:?}", e);
            BackendError::internal(FAILED)
        })?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email {}", request.email);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    let valid = passwords
        .verify(&request.password, &user.password_hash)
        .await
        .map_err(|e| match e {
            PasswordError::TooLong => BackendError::bad_request(e.to_string()),
            other => {
                tracing::error!("Password verification failed: {:?}", other);
                BackendError::internal(FAILED)
            }
        })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", request.email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = tokens.create_token(user.user_id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal(FAILED)
    })?;

    tracing::info!("Login successful: {}", user.email);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    }))
}
