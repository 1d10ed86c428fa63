//! Persistence layer: the document store trait and its backends.
//!
//! Projects are stored one document per key (`id`), the whole document as a
//! serialized JSON blob (schema-on-read). Two interchangeable backends
//! implement the same contract: [`memory::InMemoryStore`] for tests and
//! development, [`sqlite::SqliteStore`] for durable storage.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod memory;
pub mod sqlite;
pub mod store;

pub use store::{ProjectStore, StoreError};

/// Database pool alias used across the workspace.
pub type DbPool = SqlitePool;

/// Create a SQLite connection pool, creating the database file if missing.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Run pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
