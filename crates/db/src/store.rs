//! The document store contract.

use async_trait::async_trait;
use hub_core::project::Project;

/// Failures from the persistence layer.
///
/// Surfaced to callers as a generic store failure; never silently swallowed
/// for mutating operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed storage of project documents.
///
/// Each mutating call persists before returning; there is no write-behind
/// caching. The contract deliberately carries no version token: callers do
/// read-modify-write cycles and the last writer wins.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All stored documents in stable storage (insertion) order.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// Fetch one document by id.
    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError>;

    /// Upsert: create if absent, replace if present.
    async fn put(&self, project: &Project) -> Result<(), StoreError>;

    /// Remove a document. Returns whether a document existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Atomically replace the entire document set. A concurrent reader must
    /// never observe a half-replaced store; on failure the previous set
    /// remains intact.
    async fn replace_all(&self, projects: Vec<Project>) -> Result<(), StoreError>;

    /// Number of stored documents. Used by bootstrap seeding.
    async fn count(&self) -> Result<u64, StoreError>;
}
