//! Site-wide settings (single row).

use artist_site_core::persona::ArtistPersona;
use artist_site_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The raw `site_settings` row. Persona is stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingsRow {
    pub default_persona: String,
    pub updated_at: Timestamp,
}

/// Settings as served to clients.
///
/// `updated_at` is `None` until the admin saves settings for the first time.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub default_persona: ArtistPersona,
    pub updated_at: Option<Timestamp>,
}

/// DTO for updating settings. The persona is parsed by the handler so an
/// unknown value surfaces as a validation error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettings {
    pub default_persona: String,
}
