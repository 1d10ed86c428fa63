//! Project aggregate and its nested collections.
//!
//! Wire names are camelCase because exported documents must round-trip
//! data produced by earlier revisions of the app (and imports preserve
//! foreign ids verbatim, so ids are opaque strings rather than integers).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Which browsing bucket a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Present,
    Future,
}

/// Primary project status; drives the UI badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
    Income,
    NoIncome,
    OnHold,
}

/// A user-defined key/value field attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// A named external link attached to a project.
///
/// Link ids and custom-field ids live in independent namespaces; a link id
/// may collide with a custom-field id without conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantLink {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A comment owned by its parent project.
///
/// Author identity (`user_id`, `username`) is captured at creation time and
/// never re-resolved, so a later username change does not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub username: String,
    pub created_at: Timestamp,
    /// Emoji symbol -> count. Absent on the wire when empty, matching the
    /// shape older revisions produced.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub reactions: BTreeMap<String, u64>,
}

/// The root aggregate: one stored document per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub department: Department,
    pub status: ProjectStatus,
    /// Free-form text; loosened from a closed enum in early revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub important_links: Vec<ImportantLink>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Find a comment by id.
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Find a comment by id, mutably.
    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }
}

/// Fields accepted when creating a project. The server assigns `id`,
/// `created_at`, `updated_at`, and starts with an empty comment list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub department: Department,
    pub status: ProjectStatus,
    #[serde(default)]
    pub secondary_status: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub important_links: Vec<ImportantLink>,
}

/// Partial update for a project. Absent fields are left untouched; `id`,
/// `created_at`, and `comments` are not patchable.
///
/// An explicit JSON `null` deserializes to `None` and is indistinguishable
/// from an absent field, so an optional field (`goal`, `githubUrl`, ...)
/// cannot be cleared back to absent through a patch, only overwritten with
/// a new value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub department: Option<Department>,
    pub status: Option<ProjectStatus>,
    pub secondary_status: Option<String>,
    pub goal: Option<String>,
    pub github_url: Option<String>,
    pub requirements: Option<String>,
    pub inventory: Option<Vec<String>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub important_links: Option<Vec<ImportantLink>>,
}
