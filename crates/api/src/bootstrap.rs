//! First-run seeding of the demonstration project set.

use hub_db::{ProjectStore, StoreError};

/// Seed the store with the fixed demonstration projects if it is empty.
///
/// Returns the number of documents inserted (0 when the store already has
/// data). Runs once at startup, never concurrently with request traffic.
pub async fn seed_if_empty(store: &dyn ProjectStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let projects = hub_core::seed::demo_projects();
    let count = projects.len();
    for project in &projects {
        store.put(project).await?;
    }
    tracing::info!(count, "Seeded empty store with demonstration projects");
    Ok(count)
}
