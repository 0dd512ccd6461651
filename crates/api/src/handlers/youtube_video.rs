//! Handlers for the `/videos` resource (YouTube performance videos).

use artist_site_core::error::CoreError;
use artist_site_core::types::DbId;
use artist_site_core::youtube::parse_youtube_url;
use artist_site_db::models::youtube_video::CreateYoutubeVideo;
use artist_site_db::repositories::YoutubeVideoRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/videos
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let videos = YoutubeVideoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// POST /api/v1/videos
///
/// Add a video from any recognised YouTube link. The embed and thumbnail
/// URLs are derived from the video id. Adding the same video twice is a 409.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateYoutubeVideo>,
) -> AppResult<impl IntoResponse> {
    let source_url = input.url.trim();
    let link = parse_youtube_url(source_url)?;

    if let Some(existing) = YoutubeVideoRepo::find_by_video_id(&state.pool, &link.video_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Video {} is already listed (id {})",
            link.video_id, existing.id
        ))));
    }

    let video = YoutubeVideoRepo::create(&state.pool, source_url, &link).await?;

    tracing::info!(
        id = video.id,
        video_id = %video.video_id,
        user = %admin.username,
        token_id = %admin.token_id,
        "YouTube video added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !YoutubeVideoRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "YoutubeVideo",
            id,
        }));
    }

    tracing::info!(
        id,
        user = %admin.username,
        token_id = %admin.token_id,
        "YouTube video deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
