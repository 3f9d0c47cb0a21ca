/**
 * Registration Handler
 *
 * POST /api/register
 *
 * 1. Validate the body (422 on failure)
 * 2. Reject an email that is already registered (400)
 * 3. Hash the password; over 72 bytes is rejected (400)
 * 4. Insert the user and issue a token
 *
 * Unexpected failures are logged and answered with 500 `Registration failed`.
 */
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::store::{NewUser, SharedStore, StoreError};
use axum::{extract::State, response::Json};

const FAILED: &str = "Registration failed";

pub async fn register(
    State(store): State<SharedStore>,
    State(tokens): State<TokenService>,
    State(passwords): State<PasswordHasher>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let request = request.validate()?;
    tracing::info!("Register request for email: {}", request.email);

    let existing = store.find_user_by_email(&request.email).await.map_err(|e| {
        tracing::error!("Registration lookup failed: {:?}", e);
        BackendError::internal(FAILED)
    })?;
    if existing.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(BackendError::bad_request("Email already registered"));
    }

    let password_hash = passwords.hash(&request.password).await.map_err(|e| match e {
        PasswordError::TooLong => BackendError::bad_request(e.to_string()),
        other => {
            tracing::error!("Failed to hash password: {:?}", other);
            BackendError::internal(FAILED)
        }
    })?;

    let user = store
        .insert_user(NewUser {
            username: request.username,
            email: request.email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => BackendError::bad_request("Email already registered"),
            other => {
                tracing::error!("Failed to create user: {:?}", other);
                BackendError::internal(FAILED)
            }
        })?;

    let token = tokens.create_token(user.user_id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal(FAILED)
    })?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        message: "User registered successfully".to_string(),
        token,
        user: user.into(),
    }))
}
