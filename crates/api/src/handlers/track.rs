//! Handlers for the `/tracks` resource.
//!
//! Reads are public (the landing page lists tracks); every mutation requires
//! an admin token. Field rules live in `artist_site_core::track`.

use artist_site_core::error::CoreError;
use artist_site_core::track::validate_track;
use artist_site_core::types::DbId;
use artist_site_db::models::track::TrackInput;
use artist_site_db::repositories::TrackRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Track", id })
}

/// GET /api/v1/tracks
///
/// List all tracks in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tracks = TrackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tracks }))
}

/// GET /api/v1/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: track }))
}

/// POST /api/v1/tracks
///
/// Create a track. Requires a name and at least one music source.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<TrackInput>,
) -> AppResult<impl IntoResponse> {
    let validated = validate_track(input.fields())?;
    let track = TrackRepo::create(&state.pool, &validated).await?;

    tracing::info!(
        track_id = track.id,
        name = %track.name,
        user = %admin.username,
        token_id = %admin.token_id,
        "Track created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: track })))
}

/// PUT /api/v1/tracks/{id}
///
/// Replace a track's editable fields. `id` and `createdAt` never change.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TrackInput>,
) -> AppResult<impl IntoResponse> {
    let validated = validate_track(input.fields())?;
    let track = TrackRepo::update(&state.pool, id, &validated)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        track_id = id,
        user = %admin.username,
        token_id = %admin.token_id,
        "Track updated",
    );

    Ok(Json(DataResponse { data: track }))
}

/// DELETE /api/v1/tracks/{id}
///
/// Delete a track. Deleting an unknown id is a 404, not a silent no-op.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TrackRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(
        track_id = id,
        user = %admin.username,
        token_id = %admin.token_id,
        "Track deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
