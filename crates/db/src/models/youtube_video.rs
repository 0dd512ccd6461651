//! YouTube video entity model and DTOs.

use artist_site_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `youtube_videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub id: DbId,
    pub source_url: String,
    pub video_id: String,
    pub embed_url: String,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
}

/// DTO for adding a video: just the link the admin copied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateYoutubeVideo {
    pub url: String,
}
