//! In-memory store backend.
//!
//! Keeps documents in a `Vec` behind a `tokio::sync::RwLock` so list order
//! is insertion order, matching the SQLite backend's rowid order. Used by
//! unit and integration tests and available for dev runs without a database
//! file.

use async_trait::async_trait;
use hub_core::project::Project;
use tokio::sync::RwLock;

use crate::store::{ProjectStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Vec<Project>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor pre-populated with documents.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            inner: RwLock::new(projects),
        }
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.inner.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn put(&self, project: &Project) -> Result<(), StoreError> {
        let mut projects = self.inner.write().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut projects = self.inner.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() != before)
    }

    async fn replace_all(&self, projects: Vec<Project>) -> Result<(), StoreError> {
        // Single swap under the write lock; readers see old or new, never a mix.
        *self.inner.write().await = projects;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hub_core::project::{Department, ProjectStatus};

    fn project(id: &str, title: &str) -> Project {
        let now = Utc::now();
        Project {
            id: id.into(),
            title: title.into(),
            emoji: "📊".into(),
            description: "test".into(),
            department: Department::Present,
            status: ProjectStatus::Active,
            secondary_status: None,
            goal: None,
            github_url: None,
            requirements: None,
            inventory: vec![],
            custom_fields: vec![],
            important_links: vec![],
            comments: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn put_is_upsert_and_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.put(&project("a", "first")).await.unwrap();
        store.put(&project("b", "second")).await.unwrap();
        store.put(&project("a", "first, renamed")).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "a");
        assert_eq!(listed[0].title, "first, renamed");
        assert_eq!(listed[1].id, "b");
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let store = InMemoryStore::with_projects(vec![project("a", "first")]);
        let one = store.get("a").await.unwrap();
        let two = store.get("a").await.unwrap();
        assert_eq!(one, two);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_document_existed() {
        let store = InMemoryStore::with_projects(vec![project("a", "first")]);
        assert!(store.delete("a").await.unwrap());
        assert!(!store.delete("a").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn replace_all_swaps_the_whole_set() {
        let store = InMemoryStore::with_projects(vec![project("a", "old")]);
        store
            .replace_all(vec![project("x", "new"), project("y", "newer")])
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(store.get("a").await.unwrap().is_none());
        assert_eq!(listed[0].id, "x");
    }
}
