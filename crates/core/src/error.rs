//! Domain error taxonomy.

/// Domain-level errors surfaced by core operations.
///
/// The API layer maps these to HTTP statuses; core code never deals in
/// status codes directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. `entity` distinguishes the
    /// granularity ("Project" vs "Comment") so a missing comment inside an
    /// existing project is not reported as a missing project.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input failed shape or content validation (e.g. an import payload
    /// whose `projects` member is not an array).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No caller identity is available for an operation that requires one.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but its role does not permit the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a project-level not-found error.
    pub fn project_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Project",
            id: id.into(),
        }
    }

    /// Shorthand for a comment-level not-found error.
    pub fn comment_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Comment",
            id: id.into(),
        }
    }
}
