//! Integration tests for comments and reactions.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, expect_json, other_user_token, seeded_app, send, test_config, user_token,
};
use hub_db::ProjectStore;

#[tokio::test]
async fn create_comment_react_twice_scenario() {
    let (app, store) = seeded_app();
    let config = test_config();
    let admin = admin_token(&config);
    let user = user_token(&config);

    // Create a project.
    let created = expect_json(
        send(
            &app,
            Method::POST,
            "/api/projects",
            Some(&admin),
            Some(serde_json::json!({
                "title": "Demo", "emoji": "🧪", "description": "scenario",
                "department": "present", "status": "active"
            })),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let project_id = created["id"].as_str().unwrap().to_string();

    // Any authenticated user comments on it.
    let comment = expect_json(
        send(
            &app,
            Method::POST,
            &format!("/api/projects/{project_id}/comments"),
            Some(&user),
            Some(serde_json::json!({"text": "hello"})),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(comment["text"], "hello");
    assert_eq!(comment["userId"], "u1");
    assert_eq!(comment["username"], "User One");
    let comment_id = comment["id"].as_str().unwrap().to_string();

    // React twice; the counter reflects every call.
    let uri = format!("/api/projects/{project_id}/comments/{comment_id}/reactions");
    for expected in 1..=2u64 {
        let reactions = expect_json(
            send(
                &app,
                Method::POST,
                &uri,
                Some(&user),
                Some(serde_json::json!({"emoji": "👍"})),
            )
            .await,
            StatusCode::OK,
        )
        .await;
        assert_eq!(reactions["👍"], expected);
    }

    let stored = store.get(&project_id).await.unwrap().unwrap();
    assert_eq!(stored.comments[0].reactions["👍"], 2);
}

#[tokio::test]
async fn anonymous_cannot_comment_or_react() {
    let (app, _store) = seeded_app();

    let comment = send(
        &app,
        Method::POST,
        "/api/projects/1/comments",
        None,
        Some(serde_json::json!({"text": "anon"})),
    )
    .await;
    assert_eq!(comment.status(), StatusCode::UNAUTHORIZED);

    let reaction = send(
        &app,
        Method::POST,
        "/api/projects/1/comments/c1/reactions",
        None,
        Some(serde_json::json!({"emoji": "👍"})),
    )
    .await;
    assert_eq!(reaction.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn comment_on_unknown_project_is_404() {
    let (app, _store) = seeded_app();
    let user = user_token(&test_config());
    let response = send(
        &app,
        Method::POST,
        "/api/projects/ghost/comments",
        Some(&user),
        Some(serde_json::json!({"text": "hi"})),
    )
    .await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert!(json["error"].as_str().unwrap().contains("Project"));
}

#[tokio::test]
async fn missing_comment_is_distinct_from_missing_project() {
    let (app, _store) = seeded_app();
    let admin = admin_token(&test_config());

    // Project "1" exists, comment "nope" does not.
    let response = send(
        &app,
        Method::DELETE,
        "/api/projects/1/comments/nope",
        Some(&admin),
        None,
    )
    .await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert!(json["error"].as_str().unwrap().contains("Comment"));
}

#[tokio::test]
async fn author_edits_own_comment_without_losing_reactions() {
    let (app, store) = seeded_app();
    let config = test_config();
    let user = user_token(&config);

    let comment = expect_json(
        send(
            &app,
            Method::POST,
            "/api/projects/2/comments",
            Some(&user),
            Some(serde_json::json!({"text": "tpyo"})),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let cid = comment["id"].as_str().unwrap();

    send(
        &app,
        Method::POST,
        &format!("/api/projects/2/comments/{cid}/reactions"),
        Some(&user),
        Some(serde_json::json!({"emoji": "🎉"})),
    )
    .await;

    let edited = expect_json(
        send(
            &app,
            Method::PATCH,
            &format!("/api/projects/2/comments/{cid}"),
            Some(&user),
            Some(serde_json::json!({"text": "typo"})),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(edited["text"], "typo");
    assert_eq!(edited["reactions"]["🎉"], 1);
    assert_eq!(edited["createdAt"], comment["createdAt"]);
    assert_eq!(edited["userId"], comment["userId"]);

    let stored = store.get("2").await.unwrap().unwrap();
    assert_eq!(stored.comments[0].text, "typo");
}

#[tokio::test]
async fn another_user_cannot_modify_someone_elses_comment() {
    let (app, store) = seeded_app();
    let config = test_config();
    let author = user_token(&config);
    let other = other_user_token(&config);

    let comment = expect_json(
        send(
            &app,
            Method::POST,
            "/api/projects/2/comments",
            Some(&author),
            Some(serde_json::json!({"text": "mine"})),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let cid = comment["id"].as_str().unwrap();

    let edit = send(
        &app,
        Method::PATCH,
        &format!("/api/projects/2/comments/{cid}"),
        Some(&other),
        Some(serde_json::json!({"text": "not yours"})),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::FORBIDDEN);

    let delete = send(
        &app,
        Method::DELETE,
        &format!("/api/projects/2/comments/{cid}"),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let stored = store.get("2").await.unwrap().unwrap();
    assert_eq!(stored.comments[0].text, "mine");
}

#[tokio::test]
async fn admin_can_delete_any_comment() {
    let (app, store) = seeded_app();
    let config = test_config();
    let admin = admin_token(&config);

    // Seed project "3" has a comment "c1" by someone else.
    let response = send(
        &app,
        Method::DELETE,
        "/api/projects/3/comments/c1",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = store.get("3").await.unwrap().unwrap();
    assert!(stored.comments.is_empty());
}

#[tokio::test]
async fn comments_keep_insertion_order() {
    let (app, store) = seeded_app();
    let user = user_token(&test_config());

    for text in ["first", "second", "third"] {
        send(
            &app,
            Method::POST,
            "/api/projects/2/comments",
            Some(&user),
            Some(serde_json::json!({"text": text})),
        )
        .await;
    }

    let stored = store.get("2").await.unwrap().unwrap();
    let texts: Vec<_> = stored.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}
