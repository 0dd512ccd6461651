//! Repository for the `youtube_videos` table.

use artist_site_core::types::DbId;
use artist_site_core::youtube::YoutubeLink;
use sqlx::SqlitePool;

use crate::models::youtube_video::YoutubeVideo;

const COLUMNS: &str = "id, source_url, video_id, embed_url, thumbnail_url, created_at";

/// Provides create/list/delete for YouTube videos. Videos are never edited;
/// the admin deletes and re-adds instead.
pub struct YoutubeVideoRepo;

impl YoutubeVideoRepo {
    /// Insert a video parsed from `source_url`, returning the created row.
    ///
    /// Fails with a unique-constraint violation (`uq_youtube_videos_video_id`)
    /// when the same video id is already stored.
    pub async fn create(
        pool: &SqlitePool,
        source_url: &str,
        link: &YoutubeLink,
    ) -> Result<YoutubeVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO youtube_videos \
                (source_url, video_id, embed_url, thumbnail_url, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(source_url)
            .bind(&link.video_id)
            .bind(&link.embed_url)
            .bind(&link.thumbnail_url)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<YoutubeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM youtube_videos WHERE id = ?1");
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_video_id(
        pool: &SqlitePool,
        video_id: &str,
    ) -> Result<Option<YoutubeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM youtube_videos WHERE video_id = ?1");
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .bind(video_id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<YoutubeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM youtube_videos ORDER BY id");
        sqlx::query_as::<_, YoutubeVideo>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM youtube_videos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
