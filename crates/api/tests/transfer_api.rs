//! Integration tests for whole-store export and import.

mod common;

use axum::http::{Method, StatusCode};
use common::{admin_token, expect_json, get, seeded_app, send, test_config, user_token};
use hub_db::ProjectStore;

fn project_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "emoji": "📦",
        "description": "imported",
        "department": "present",
        "status": "active",
        "createdAt": "2023-04-15T08:00:00Z",
        "updatedAt": "2023-04-15T08:00:00Z"
    })
}

#[tokio::test]
async fn export_snapshots_the_full_store() {
    let (app, _store) = seeded_app();
    let token = user_token(&test_config());

    let json = expect_json(get(&app, "/api/export", Some(&token)).await, StatusCode::OK).await;
    let projects = json["projects"].as_array().expect("projects array");
    assert_eq!(projects.len(), 3);
    // Ids and nested collections are exposed unfiltered.
    assert_eq!(projects[0]["id"], "1");
    assert_eq!(projects[0]["comments"][0]["id"], "c1");
}

#[tokio::test]
async fn export_requires_authentication() {
    let (app, _store) = seeded_app();
    let response = get(&app, "/api/export", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn export_import_round_trips_exactly() {
    let (app, store) = seeded_app();
    let config = test_config();
    let admin = admin_token(&config);

    let exported = expect_json(get(&app, "/api/export", Some(&admin)).await, StatusCode::OK).await;
    let before = store.list().await.unwrap();

    // Re-import the export into the same deployment.
    let result = expect_json(
        send(&app, Method::POST, "/api/import", Some(&admin), Some(exported)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(result["success"], true);

    let after = store.list().await.unwrap();
    assert_eq!(after, before, "import of an export must be id-for-id identical");
}

#[tokio::test]
async fn import_replaces_the_whole_store() {
    let (app, store) = seeded_app();
    let admin = admin_token(&test_config());

    let payload = serde_json::json!({
        "projects": [project_json("a", "Only"), project_json("b", "Two")]
    });
    let response = send(&app, Method::POST, "/api/import", Some(&admin), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let projects = store.list().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "a");
    assert!(store.get("1").await.unwrap().is_none());
}

#[tokio::test]
async fn import_rejects_non_array_projects_and_leaves_store_unchanged() {
    let (app, store) = seeded_app();
    let admin = admin_token(&test_config());
    let before = store.list().await.unwrap();

    let payload = serde_json::json!({"projects": "not-an-array"});
    let response = send(&app, Method::POST, "/api/import", Some(&admin), Some(payload)).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn import_rejects_missing_projects_field() {
    let (app, store) = seeded_app();
    let admin = admin_token(&test_config());

    let payload = serde_json::json!({"things": []});
    let response = send(&app, Method::POST, "/api/import", Some(&admin), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn import_rejects_malformed_documents_before_mutating() {
    let (app, store) = seeded_app();
    let admin = admin_token(&test_config());

    // Second element is missing required fields; nothing may be committed.
    let payload = serde_json::json!({
        "projects": [project_json("ok", "Fine"), {"id": "broken"}]
    });
    let response = send(&app, Method::POST, "/api/import", Some(&admin), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(store.count().await.unwrap(), 3);
    assert!(store.get("ok").await.unwrap().is_none());
}

#[tokio::test]
async fn import_is_admin_only() {
    let (app, store) = seeded_app();
    let user = user_token(&test_config());

    let payload = serde_json::json!({"projects": []});
    let response = send(&app, Method::POST, "/api/import", Some(&user), Some(payload)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(store.count().await.unwrap(), 3);
}
