//! SQLite store backend.
//!
//! One row per project in the `projects` table: `id TEXT PRIMARY KEY`,
//! `data TEXT` holding the serialized document. Reads deserialize on the
//! way out (schema-on-read); list order is rowid order, i.e. insertion
//! order.

use async_trait::async_trait;
use hub_core::project::Project;
use sqlx::Row;

use crate::store::{ProjectStore, StoreError};
use crate::DbPool;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query("SELECT data FROM projects ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            let data: String = row.get("data");
            projects.push(serde_json::from_str(&data)?);
        }
        Ok(projects)
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query("SELECT data FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let data: String = row.get("data");
                Ok(Some(serde_json::from_str(&data)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, project: &Project) -> Result<(), StoreError> {
        let data = serde_json::to_string(project)?;
        sqlx::query(
            "INSERT INTO projects (id, data) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET data = excluded.data",
        )
        .bind(&project.id)
        .bind(&data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn replace_all(&self, projects: Vec<Project>) -> Result<(), StoreError> {
        // Serialize everything up front so a bad document cannot fail the
        // transaction halfway through.
        let mut rows = Vec::with_capacity(projects.len());
        for project in &projects {
            rows.push((project.id.clone(), serde_json::to_string(project)?));
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM projects").execute(&mut *tx).await?;
        for (id, data) in rows {
            sqlx::query("INSERT INTO projects (id, data) VALUES (?1, ?2)")
                .bind(id)
                .bind(data)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::debug!(count = projects.len(), "Replaced project document set");
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM projects")
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.get("n");
        Ok(n as u64)
    }
}
