#![allow(dead_code)]

use std::sync::LazyLock;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use artist_site_api::auth::jwt::{generate_access_token, JwtConfig};
use artist_site_api::auth::password::hash_password;
use artist_site_api::auth::ROLE_ADMIN;
use artist_site_api::config::{AdminConfig, LogFormat, ServerConfig};
use artist_site_api::router::build_app_router;
use artist_site_api::state::AppState;
use artist_site_db::DbPool;

pub const ADMIN_USERNAME: &str = "xboy";
pub const ADMIN_PASSWORD: &str = "test_password_123!";
pub const JWT_SECRET: &str = "integration-test-secret";

static ADMIN_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"));

/// Build a test `ServerConfig` with safe defaults and a known admin login.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password_hash: ADMIN_HASH.clone(),
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = artist_site_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory pool should open");
    artist_site_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Build the full application router over the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// A valid admin access token signed with the test secret.
pub fn admin_token() -> String {
    generate_access_token(ADMIN_USERNAME, ROLE_ADMIN, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
