use std::sync::Arc;

use hub_core::error::CoreError;
use hub_core::policy::{Action, Role};
use hub_db::ProjectStore;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store and config are behind `Arc`. The store is
/// trait-backed so the same handlers run against the in-memory backend in
/// tests and SQLite in production.
#[derive(Clone)]
pub struct AppState {
    /// Document store backend.
    pub store: Arc<dyn ProjectStore>,
    /// Server configuration (policy flags, JWT secret, accounts).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }

    /// Authorize `role` for `action` against the deployment policy, before
    /// any store access. Anonymous callers get 401 (present credentials),
    /// authenticated callers with an insufficient role get 403.
    pub fn authorize(&self, role: Role, action: Action) -> Result<(), AppError> {
        if self.config.policy().allows(role, action) {
            return Ok(());
        }
        let err = match role {
            Role::Anonymous => CoreError::Unauthorized("Authentication required".into()),
            _ => CoreError::Forbidden(format!(
                "Role '{}' may not perform this operation",
                role.as_str()
            )),
        };
        Err(AppError::Core(err))
    }
}
