//! Route definitions for YouTube videos.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::youtube_video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(youtube_video::list).post(youtube_video::create))
        .route("/{id}", delete(youtube_video::delete))
}
