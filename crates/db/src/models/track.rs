//! Track entity model and DTOs.

use artist_site_core::track::TrackFields;
use artist_site_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub spotify_embed: String,
    pub apple_embed: String,
    pub song_url: String,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a track.
///
/// Updates replace all five fields, so create and update share one shape.
/// Omitted fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackInput {
    pub name: String,
    pub spotify_embed: String,
    pub apple_embed: String,
    pub song_url: String,
    pub image_url: String,
}

impl TrackInput {
    pub fn fields(&self) -> TrackFields<'_> {
        TrackFields {
            name: &self.name,
            spotify_embed: &self.spotify_embed,
            apple_embed: &self.apple_embed,
            song_url: &self.song_url,
            image_url: &self.image_url,
        }
    }
}
