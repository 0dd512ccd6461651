//! HTTP-level integration tests for site settings and the landing page.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_json_auth, put_json, put_json_auth};
use serde_json::json;

async fn seed_content(app: axum::Router) {
    let token = admin_token();
    let response = post_json_auth(
        app.clone(),
        "/api/v1/tracks",
        json!({ "name": "Serene Drift", "songUrl": "https://example.com/s" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app,
        "/api/v1/videos",
        json!({ "url": "https://www.youtube.com/watch?v=abc123" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn settings_default_to_producer() {
    let app = common::build_test_app(common::test_pool().await);

    let response = get(app, "/api/v1/settings").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["defaultPersona"], "producer");
}

#[tokio::test]
async fn admin_can_change_default_persona() {
    let app = common::build_test_app(common::test_pool().await);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/settings",
        json!({ "defaultPersona": "Beatboxer" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["defaultPersona"], "beatboxer");

    let json = body_json(get(app, "/api/v1/settings").await).await;
    assert_eq!(json["data"]["defaultPersona"], "beatboxer");
    assert!(json["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn unknown_persona_is_validation_error() {
    let app = common::build_test_app(common::test_pool().await);

    let response = put_json_auth(
        app,
        "/api/v1/settings",
        json!({ "defaultPersona": "rapper" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn settings_update_requires_a_token() {
    let app = common::build_test_app(common::test_pool().await);

    let body = json!({ "defaultPersona": "beatboxer" });
    let response = put_json(app, "/api/v1/settings", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn landing_uses_default_persona() {
    let app = common::build_test_app(common::test_pool().await);
    seed_content(app.clone()).await;

    let json = body_json(get(app, "/api/v1/landing").await).await;
    let page = &json["data"];

    assert_eq!(page["persona"], "producer");
    assert_eq!(page["alternatePersona"], "beatboxer");
    assert_eq!(page["tracks"].as_array().unwrap().len(), 1);
    assert!(page["videos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn landing_persona_query_overrides_default() {
    let app = common::build_test_app(common::test_pool().await);
    seed_content(app.clone()).await;

    let json = body_json(get(app, "/api/v1/landing?persona=beatboxer").await).await;
    let page = &json["data"];

    assert_eq!(page["persona"], "beatboxer");
    assert_eq!(page["alternatePersona"], "producer");
    assert!(page["tracks"].as_array().unwrap().is_empty());
    assert_eq!(page["videos"][0]["videoId"], "abc123");
}

#[tokio::test]
async fn landing_follows_changed_default() {
    let app = common::build_test_app(common::test_pool().await);
    seed_content(app.clone()).await;
    put_json_auth(
        app.clone(),
        "/api/v1/settings",
        json!({ "defaultPersona": "beatboxer" }),
        &admin_token(),
    )
    .await;

    let json = body_json(get(app, "/api/v1/landing").await).await;

    assert_eq!(json["data"]["persona"], "beatboxer");
}

#[tokio::test]
async fn landing_rejects_unknown_persona() {
    let app = common::build_test_app(common::test_pool().await);

    let response = get(app, "/api/v1/landing?persona=dj").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
