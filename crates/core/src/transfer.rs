//! Bulk transfer: the export envelope and import-payload validation.
//!
//! Validation happens entirely before any store mutation (validate, then
//! commit). The actual atomic replace lives in the store layer.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::project::Project;

/// The portable whole-store snapshot: `{ "projects": [...] }`.
///
/// No field filtering is applied on export; the full internal shape,
/// including ids, is exposed so an export can be re-imported verbatim.
#[derive(Debug, Serialize)]
pub struct ExportEnvelope {
    pub projects: Vec<Project>,
}

/// Validate an import payload and extract its projects.
///
/// Rejects with `Validation` when the payload is not an object, when its
/// `projects` member is missing or not an array, when any element is not a
/// well-formed project document, or when two elements share an id (the
/// store is keyed by id, so a duplicate would silently drop a document).
/// Imported ids are preserved verbatim, never regenerated.
pub fn parse_import(payload: &serde_json::Value) -> Result<Vec<Project>, CoreError> {
    let projects_value = payload
        .as_object()
        .and_then(|obj| obj.get("projects"))
        .ok_or_else(|| CoreError::Validation("import payload must contain a `projects` field".into()))?;

    let items = projects_value
        .as_array()
        .ok_or_else(|| CoreError::Validation("`projects` must be an array".into()))?;

    let mut projects = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let project: Project = serde_json::from_value(item.clone()).map_err(|e| {
            CoreError::Validation(format!("invalid project at index {index}: {e}"))
        })?;
        projects.push(project);
    }

    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate project id in import payload: {}",
                project.id
            )));
        }
    }

    Ok(projects)
}
