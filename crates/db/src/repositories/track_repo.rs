//! Repository for the `tracks` table.

use artist_site_core::track::ValidatedTrack;
use artist_site_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::track::Track;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, spotify_embed, apple_embed, song_url, image_url, created_at, updated_at";

/// Provides CRUD operations for tracks.
///
/// Inputs are already validated; the repository only persists.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ValidatedTrack) -> Result<Track, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO tracks \
                (name, spotify_embed, apple_embed, song_url, image_url, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(&input.spotify_embed)
            .bind(&input.apple_embed)
            .bind(&input.song_url)
            .bind(&input.image_url)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = ?1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// Replace the editable fields of a track. `id` and `created_at` are
    /// never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ValidatedTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                name = ?2, \
                spotify_embed = ?3, \
                apple_embed = ?4, \
                song_url = ?5, \
                image_url = ?6, \
                updated_at = ?7 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.spotify_embed)
            .bind(&input.apple_embed)
            .bind(&input.song_url)
            .bind(&input.image_url)
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a track. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored tracks.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
            .fetch_one(pool)
            .await
    }
}
