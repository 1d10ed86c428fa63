//! Whole-store export and import.

use axum::extract::State;
use axum::Json;
use hub_core::policy::Action;
use hub_core::transfer::{self, ExportEnvelope};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for a successful import.
#[derive(Serialize)]
pub struct ImportResult {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/export (any authenticated user)
///
/// Snapshots the full document set with no field filtering, so the output
/// can be re-imported verbatim.
pub async fn export(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ExportEnvelope>> {
    state.authorize(user.role, Action::Export)?;
    let projects = state.store.list().await?;
    Ok(Json(ExportEnvelope { projects }))
}

/// POST /api/import (admin only)
///
/// Validate-then-commit: the payload is fully parsed and checked before the
/// store is touched, and the replace itself is atomic, so a failed import
/// leaves the previous document set intact. The body is taken as raw JSON
/// rather than a typed extractor so shape problems surface as this API's
/// 400 validation error instead of a framework-level rejection.
pub async fn import(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ImportResult>> {
    state.authorize(user.role, Action::Import)?;
    let projects = transfer::parse_import(&payload)?;
    let count = projects.len();
    state.store.replace_all(projects).await?;
    tracing::info!(count, "Imported project document set");
    Ok(Json(ImportResult {
        success: true,
        message: "Data imported successfully",
    }))
}
