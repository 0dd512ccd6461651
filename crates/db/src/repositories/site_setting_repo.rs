//! Repository for the single-row `site_settings` table.

use artist_site_core::persona::ArtistPersona;
use sqlx::SqlitePool;

use crate::models::site_setting::{SiteSettings, SiteSettingsRow};

const SETTINGS_ROW_ID: i64 = 1;

pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Load settings, falling back to defaults when none were ever saved.
    ///
    /// A stored persona that no longer parses also falls back to the default.
    pub async fn get(pool: &SqlitePool) -> Result<SiteSettings, sqlx::Error> {
        let row = sqlx::query_as::<_, SiteSettingsRow>(
            "SELECT default_persona, updated_at FROM site_settings WHERE id = ?1",
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(into_settings).unwrap_or_default())
    }

    /// Insert or replace the settings row, returning the stored settings.
    pub async fn upsert(
        pool: &SqlitePool,
        default_persona: ArtistPersona,
    ) -> Result<SiteSettings, sqlx::Error> {
        let row = sqlx::query_as::<_, SiteSettingsRow>(
            "INSERT INTO site_settings (id, default_persona, updated_at) \
             VALUES (?1, ?2, ?3) \
             ON CONFLICT (id) DO UPDATE SET \
                default_persona = excluded.default_persona, \
                updated_at = excluded.updated_at \
             RETURNING default_persona, updated_at",
        )
        .bind(SETTINGS_ROW_ID)
        .bind(default_persona.as_str())
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(into_settings(row))
    }
}

fn into_settings(row: SiteSettingsRow) -> SiteSettings {
    let default_persona = row.default_persona.parse().unwrap_or_else(|_| {
        tracing::warn!(stored = %row.default_persona, "Unknown stored persona, using default");
        ArtistPersona::default()
    });
    SiteSettings {
        default_persona,
        updated_at: Some(row.updated_at),
    }
}
