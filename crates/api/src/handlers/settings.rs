//! Handlers for site-wide settings.

use artist_site_core::persona::ArtistPersona;
use artist_site_db::models::site_setting::UpdateSiteSettings;
use artist_site_db::repositories::SiteSettingsRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Choose which persona visitors land on.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateSiteSettings>,
) -> AppResult<impl IntoResponse> {
    let persona: ArtistPersona = input.default_persona.parse()?;
    let settings = SiteSettingsRepo::upsert(&state.pool, persona).await?;

    tracing::info!(
        default_persona = %persona,
        user = %admin.username,
        token_id = %admin.token_id,
        "Site settings updated",
    );

    Ok(Json(DataResponse { data: settings }))
}
