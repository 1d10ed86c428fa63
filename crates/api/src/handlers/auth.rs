//! Handler for `POST /api/auth/login`.

use axum::extract::State;
use axum::Json;
use hub_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public caller identity embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// POST /api/auth/login
///
/// Authenticate against the configured accounts. Unknown usernames and
/// wrong passwords produce the same error so the response does not reveal
/// which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = state.config.find_user(&input.username).ok_or_else(invalid)?;

    let password_ok = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("password hash error: {e}"))))?;
    if !password_ok {
        tracing::warn!(username = %input.username, "Failed login attempt");
        return Err(invalid());
    }

    let token =
        generate_access_token(&user.username, &user.username, &user.role, &state.config.jwt)
            .map_err(|e| AppError::Core(CoreError::Internal(format!("token error: {e}"))))?;

    tracing::info!(username = %user.username, role = %user.role, "Login succeeded");

    Ok(Json(AuthResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.username.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
        },
    }))
}
