//! The public landing page payload.
//!
//! The page shows one persona at a time: the producer persona lists tracks,
//! the beatboxer persona lists performance videos. Visitors switch with the
//! persona toggle, which re-requests this endpoint with `?persona=`.

use artist_site_core::persona::ArtistPersona;
use artist_site_db::models::track::Track;
use artist_site_db::models::youtube_video::YoutubeVideo;
use artist_site_db::repositories::{SiteSettingsRepo, TrackRepo, YoutubeVideoRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::PersonaParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub persona: ArtistPersona,
    /// The persona the toggle switches to.
    pub alternate_persona: ArtistPersona,
    pub tracks: Vec<Track>,
    pub videos: Vec<YoutubeVideo>,
}

/// GET /api/v1/landing?persona=producer|beatboxer
///
/// Without `persona`, the admin-chosen default is used.
pub async fn get(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PersonaParams>,
) -> AppResult<impl IntoResponse> {
    let persona = match params.persona.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse::<ArtistPersona>()?,
        _ => SiteSettingsRepo::get(&state.pool).await?.default_persona,
    };

    let tracks = if persona.shows_tracks() {
        TrackRepo::list(&state.pool).await?
    } else {
        Vec::new()
    };
    let videos = if persona.shows_videos() {
        YoutubeVideoRepo::list(&state.pool).await?
    } else {
        Vec::new()
    };

    Ok(Json(DataResponse {
        data: LandingPage {
            persona,
            alternate_persona: persona.toggled(),
            tracks,
            videos,
        },
    }))
}
