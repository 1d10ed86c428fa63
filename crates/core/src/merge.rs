//! Merge engine: computes the next project document from the current one
//! plus a requested change.
//!
//! Merges are field-level and collection-element-level, never deep-recursive
//! beyond one level of nested array membership. Every operation takes `now`
//! explicitly; the only nondeterminism is comment id generation.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::error::CoreError;
use crate::project::{Comment, NewProject, Project, ProjectPatch};
use crate::types::Timestamp;

/// Identity of a comment author, captured at creation time.
#[derive(Debug, Clone)]
pub struct CommentAuthor {
    pub user_id: String,
    pub username: String,
}

/// Build a new project document from a creation request.
///
/// Assigns a fresh UUID v4 id and sets `created_at == updated_at == now`.
pub fn new_project(input: NewProject, now: Timestamp) -> Project {
    Project {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        emoji: input.emoji,
        description: input.description,
        department: input.department,
        status: input.status,
        secondary_status: input.secondary_status,
        goal: input.goal,
        github_url: input.github_url,
        requirements: input.requirements,
        inventory: input.inventory,
        custom_fields: input.custom_fields,
        important_links: input.important_links,
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

/// Shallow-merge a partial update over `project`.
///
/// Only fields present in the patch are applied; everything else keeps its
/// prior value. `updated_at` is set to `now` unconditionally.
pub fn apply_patch(project: &mut Project, patch: ProjectPatch, now: Timestamp) {
    if let Some(title) = patch.title {
        project.title = title;
    }
    if let Some(emoji) = patch.emoji {
        project.emoji = emoji;
    }
    if let Some(description) = patch.description {
        project.description = description;
    }
    if let Some(department) = patch.department {
        project.department = department;
    }
    if let Some(status) = patch.status {
        project.status = status;
    }
    if let Some(secondary_status) = patch.secondary_status {
        project.secondary_status = Some(secondary_status);
    }
    if let Some(goal) = patch.goal {
        project.goal = Some(goal);
    }
    if let Some(github_url) = patch.github_url {
        project.github_url = Some(github_url);
    }
    if let Some(requirements) = patch.requirements {
        project.requirements = Some(requirements);
    }
    if let Some(inventory) = patch.inventory {
        project.inventory = inventory;
    }
    if let Some(custom_fields) = patch.custom_fields {
        project.custom_fields = custom_fields;
    }
    if let Some(important_links) = patch.important_links {
        project.important_links = important_links;
    }
    project.updated_at = now;
}

/// Append a new comment and refresh the parent's `updated_at`.
///
/// The comment gets a fresh UUID v4 id, empty reactions, and
/// `created_at = now`. Comments are kept in insertion order. Returns a
/// clone of the appended comment for the response body.
pub fn add_comment(
    project: &mut Project,
    text: String,
    author: &CommentAuthor,
    now: Timestamp,
) -> Comment {
    let comment = Comment {
        id: Uuid::new_v4().to_string(),
        text,
        user_id: author.user_id.clone(),
        username: author.username.clone(),
        created_at: now,
        reactions: BTreeMap::new(),
    };
    project.comments.push(comment.clone());
    project.updated_at = now;
    comment
}

/// Remove the comment with the given id, refreshing `updated_at`.
///
/// Fails with a comment-level `NotFound` when no such comment exists in
/// this project.
pub fn delete_comment(
    project: &mut Project,
    comment_id: &str,
    now: Timestamp,
) -> Result<(), CoreError> {
    let before = project.comments.len();
    project.comments.retain(|c| c.id != comment_id);
    if project.comments.len() == before {
        return Err(CoreError::comment_not_found(comment_id));
    }
    project.updated_at = now;
    Ok(())
}

/// Replace only the `text` of the matching comment, leaving its reactions,
/// author, and `created_at` untouched. Refreshes the parent's `updated_at`.
pub fn update_comment(
    project: &mut Project,
    comment_id: &str,
    text: String,
    now: Timestamp,
) -> Result<Comment, CoreError> {
    let comment = project
        .comment_mut(comment_id)
        .ok_or_else(|| CoreError::comment_not_found(comment_id))?;
    comment.text = text;
    let updated = comment.clone();
    project.updated_at = now;
    Ok(updated)
}

/// Increment `reactions[emoji]` by one, creating the entry at 1 if absent.
///
/// There is no upper bound and no per-user de-duplication: repeat clicks
/// keep incrementing. The parent's `updated_at` is deliberately left alone,
/// matching the stored behavior of earlier revisions. Returns a clone of
/// the comment's full reaction map.
pub fn add_reaction(
    project: &mut Project,
    comment_id: &str,
    emoji: &str,
) -> Result<BTreeMap<String, u64>, CoreError> {
    let comment = project
        .comment_mut(comment_id)
        .ok_or_else(|| CoreError::comment_not_found(comment_id))?;
    *comment.reactions.entry(emoji.to_string()).or_insert(0) += 1;
    Ok(comment.reactions.clone())
}
