//! Shared integration-test harness.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the in-memory store, so tests are deterministic
//! and need no database file.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hub_api::auth::jwt::generate_access_token;
use hub_api::auth::jwt::JwtConfig;
use hub_api::config::ServerConfig;
use hub_api::router::build_app_router;
use hub_api::state::AppState;
use hub_core::project::Project;
use hub_db::memory::InMemoryStore;
use hub_db::ProjectStore;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-key";

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_read: true,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
        auth_users: Vec::new(),
    }
}

/// Build the application router plus a handle on the backing store so tests
/// can assert on persisted state directly.
pub fn build_test_app(config: ServerConfig, projects: Vec<Project>) -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::with_projects(projects));
    let state = AppState::new(store.clone() as Arc<dyn ProjectStore>, Arc::new(config.clone()));
    (build_app_router(state, &config), store)
}

/// App over an empty store with the default test config.
pub fn empty_app() -> (Router, Arc<InMemoryStore>) {
    build_test_app(test_config(), Vec::new())
}

/// App pre-seeded with the demonstration projects (ids "1".."3").
pub fn seeded_app() -> (Router, Arc<InMemoryStore>) {
    build_test_app(test_config(), hub_core::seed::demo_projects())
}

pub fn admin_token(config: &ServerConfig) -> String {
    generate_access_token("admin", "Administrator", "admin", &config.jwt)
        .expect("token generation should succeed")
}

pub fn user_token(config: &ServerConfig) -> String {
    generate_access_token("u1", "User One", "user", &config.jwt)
        .expect("token generation should succeed")
}

/// A token for a second, distinct regular user.
pub fn other_user_token(config: &ServerConfig) -> String {
    generate_access_token("u2", "User Two", "user", &config.jwt)
        .expect("token generation should succeed")
}

/// Issue a single request against the router.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };

    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, token, None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert status and return the parsed body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
