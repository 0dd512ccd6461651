//! Liveness and readiness probe, mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the store answers and is migrated, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest applied migration, `null` if the schema is missing or unreadable.
    pub schema_version: Option<i64>,
    pub db_connections: PoolStats,
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub open: u32,
    pub idle: usize,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let pool = &state.pool;
    let db_healthy = artist_site_db::health_check(pool).await.is_ok();
    let schema_version = if db_healthy {
        artist_site_db::schema_version(pool).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read schema version");
            None
        })
    } else {
        None
    };

    let status = match (db_healthy, schema_version) {
        (true, Some(_)) => "ok",
        _ => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        db_connections: PoolStats {
            open: pool.size(),
            idle: pool.num_idle(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
