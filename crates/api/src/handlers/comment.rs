//! Handlers for comments and reactions nested under a project.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use hub_core::error::CoreError;
use hub_core::merge;
use hub_core::policy::Action;
use hub_core::project::{Comment, Project};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for comment creation and edits.
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub text: String,
}

/// Request body for `POST .../reactions`.
#[derive(Debug, Deserialize)]
pub struct ReactionBody {
    pub emoji: String,
}

async fn load_project(state: &AppState, id: &str) -> Result<Project, AppError> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::project_not_found(id)))
}

/// POST /api/projects/{id}/comments (any authenticated user)
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<CommentBody>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    state.authorize(user.role, Action::AddComment)?;
    let mut project = load_project(&state, &id).await?;
    let comment = merge::add_comment(&mut project, body.text, &user.as_author(), Utc::now());
    state.store.put(&project).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// PATCH /api/projects/{id}/comments/{cid} (author or admin)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
    Json(body): Json<CommentBody>,
) -> AppResult<Json<Comment>> {
    state.authorize(user.role, Action::ModifyOwnComment)?;
    let mut project = load_project(&state, &id).await?;
    check_comment_ownership(&state, &user, &project, &comment_id)?;

    let comment = merge::update_comment(&mut project, &comment_id, body.text, Utc::now())?;
    state.store.put(&project).await?;
    Ok(Json(comment))
}

/// DELETE /api/projects/{id}/comments/{cid} (author or admin)
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state.authorize(user.role, Action::ModifyOwnComment)?;
    let mut project = load_project(&state, &id).await?;
    check_comment_ownership(&state, &user, &project, &comment_id)?;

    merge::delete_comment(&mut project, &comment_id, Utc::now())?;
    state.store.put(&project).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/projects/{id}/comments/{cid}/reactions (any authenticated user)
///
/// Returns the comment's full reaction map after the increment. Repeat
/// calls keep incrementing; there is no per-user de-duplication.
pub async fn add_reaction(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
    Json(body): Json<ReactionBody>,
) -> AppResult<Json<BTreeMap<String, u64>>> {
    state.authorize(user.role, Action::AddReaction)?;
    let mut project = load_project(&state, &id).await?;
    let reactions = merge::add_reaction(&mut project, &comment_id, &body.emoji)?;
    state.store.put(&project).await?;
    Ok(Json(reactions))
}

/// Enforce the author-or-admin rule for comment edit/delete.
///
/// A missing comment surfaces as a comment-level 404 rather than 403 so the
/// response does not reveal whether someone else's comment id exists.
fn check_comment_ownership(
    state: &AppState,
    user: &AuthUser,
    project: &Project,
    comment_id: &str,
) -> Result<(), AppError> {
    let comment = project
        .comment(comment_id)
        .ok_or_else(|| AppError::Core(CoreError::comment_not_found(comment_id)))?;
    if !state
        .config
        .policy()
        .can_modify_comment(user.role, &user.user_id, comment)
    {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the comment's author or an admin may modify it".into(),
        )));
    }
    Ok(())
}
