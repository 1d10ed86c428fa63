//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hub_core::error::CoreError;
use hub_core::merge::CommentAuthor;
use hub_core::policy::Role;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; requests without a valid token are rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Stable user id (from `claims.sub`).
    pub user_id: String,
    /// Display name captured onto comments.
    pub username: String,
    /// Parsed role. Unknown claims degrade to [`Role::Anonymous`].
    pub role: Role,
}

impl AuthUser {
    /// The identity triple captured onto new comments.
    pub fn as_author(&self) -> CommentAuthor {
        CommentAuthor {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
            role: Role::from_claim(&claims.role),
        })
    }
}

/// Optional authentication for endpoints that anonymous callers may reach
/// depending on deployment policy (project reads).
///
/// A missing `Authorization` header yields `None`; a header that is present
/// but invalid is still rejected with 401 so broken clients notice.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthUser>);

impl MaybeUser {
    /// The effective role for policy checks.
    pub fn role(&self) -> Role {
        self.0.as_ref().map_or(Role::Anonymous, |u| u.role)
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeUser(None));
        }
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(MaybeUser(Some(user)))
    }
}
