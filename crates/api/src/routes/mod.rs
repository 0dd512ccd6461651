pub mod auth;
pub mod health;
pub mod landing;
pub mod settings;
pub mod track;
pub mod youtube_video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/session               current token info (admin)
///
/// /tracks                     list (public), create (admin)
/// /tracks/{id}                get (public), update, delete (admin)
///
/// /videos                     list (public), add (admin)
/// /videos/{id}                delete (admin)
///
/// /settings                   get (public), update (admin)
///
/// /landing?persona=           landing page payload (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tracks", track::router())
        .nest("/videos", youtube_video::router())
        .nest("/settings", settings::router())
        .nest("/landing", landing::router())
}
