//! Handlers for the `/projects` resource.
//!
//! Every mutation is a read-modify-write cycle: fetch the document, apply
//! the merge in `hub-core`, write the document back. There is no version
//! token, so two concurrent writers to the same project race and the last
//! write wins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use hub_core::error::CoreError;
use hub_core::merge;
use hub_core::policy::Action;
use hub_core::project::{NewProject, Project, ProjectPatch};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

/// Response body for `GET /api/projects`.
#[derive(Serialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    caller: MaybeUser,
) -> AppResult<Json<ProjectList>> {
    state.authorize(caller.role(), Action::ReadProjects)?;
    let projects = state.store.list().await?;
    Ok(Json(ProjectList { projects }))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    caller: MaybeUser,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    state.authorize(caller.role(), Action::ReadProjects)?;
    let project = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::project_not_found(&id)))?;
    Ok(Json(project))
}

/// POST /api/projects (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NewProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    state.authorize(user.role, Action::WriteProject)?;
    let project = merge::new_project(input, Utc::now());
    state.store.put(&project).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/projects/{id} (admin only)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> AppResult<Json<Project>> {
    state.authorize(user.role, Action::WriteProject)?;
    let mut project = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::project_not_found(&id)))?;
    merge::apply_patch(&mut project, patch, Utc::now());
    state.store.put(&project).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id} (admin only)
///
/// Deleting a project removes its nested comments and reactions with it;
/// the whole document is the unit of storage.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.authorize(user.role, Action::WriteProject)?;
    if state.store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::project_not_found(&id)))
    }
}
