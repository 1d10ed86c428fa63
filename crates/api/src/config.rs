use hub_core::policy::{Policy, ROLE_ADMIN, ROLE_USER};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether anonymous callers may list and fetch projects (default: `true`).
    pub public_read: bool,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Accounts accepted by `POST /api/auth/login`.
    pub auth_users: Vec<StaticUser>,
}

/// A login account defined in configuration rather than a user table.
///
/// The username doubles as the stable user id carried in JWT claims and
/// captured on comments, so author-or-admin checks survive re-logins.
#[derive(Debug, Clone)]
pub struct StaticUser {
    pub username: String,
    pub role: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `3001`                                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `PUBLIC_READ`          | `true`                                  |
    /// | `AUTH_USERS`           | (empty -- logins always fail until set) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_read: bool = std::env::var("PUBLIC_READ")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("PUBLIC_READ must be `true` or `false`");

        let auth_users = match std::env::var("AUTH_USERS") {
            Ok(raw) => parse_auth_users(&raw).expect("AUTH_USERS is malformed"),
            Err(_) => Vec::new(),
        };
        if auth_users.is_empty() {
            tracing::warn!("AUTH_USERS is not set; every login attempt will be rejected");
        }

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_read,
            jwt,
            auth_users,
        }
    }

    /// The deployment's access policy.
    pub fn policy(&self) -> Policy {
        Policy::new(self.public_read)
    }

    /// Look up a configured account by username.
    pub fn find_user(&self, username: &str) -> Option<&StaticUser> {
        self.auth_users.iter().find(|u| u.username == username)
    }
}

/// Parse the `AUTH_USERS` value: semicolon-separated
/// `username:role:argon2-phc-hash` entries. Semicolons and colons cannot
/// appear inside a PHC hash string, so no escaping is needed.
pub fn parse_auth_users(raw: &str) -> Result<Vec<StaticUser>, String> {
    let mut users: Vec<StaticUser> = Vec::new();
    for entry in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let mut parts = entry.splitn(3, ':');
        let (username, role, hash) = match (parts.next(), parts.next(), parts.next()) {
            (Some(u), Some(r), Some(h)) if !u.is_empty() && !h.is_empty() => (u, r, h),
            _ => {
                return Err(format!(
                    "AUTH_USERS entry '{entry}' is not username:role:hash"
                ))
            }
        };
        if role != ROLE_ADMIN && role != ROLE_USER {
            return Err(format!(
                "AUTH_USERS entry '{username}' has unknown role '{role}'"
            ));
        }
        if users.iter().any(|u| u.username == username) {
            return Err(format!("AUTH_USERS has duplicate username '{username}'"));
        }
        users.push(StaticUser {
            username: username.to_string(),
            role: role.to_string(),
            password_hash: hash.to_string(),
        });
    }
    Ok(users)
}
