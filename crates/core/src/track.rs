//! Track field rules.
//!
//! A track needs a name and at least one way to listen to it: a Spotify
//! embed, an Apple Music embed, or a direct song link. The same rules apply
//! on create and on update.

use url::Url;

use crate::embed::{sanitize_embed, EmbedProvider};
use crate::error::CoreError;

/// Maximum length of a track name, in characters.
pub const MAX_TRACK_NAME_LEN: usize = 200;

/// Maximum length of a song or image URL.
pub const MAX_URL_LEN: usize = 2048;

/// The five admin-editable track fields, as submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackFields<'a> {
    pub name: &'a str,
    pub spotify_embed: &'a str,
    pub apple_embed: &'a str,
    pub song_url: &'a str,
    pub image_url: &'a str,
}

/// Track fields after validation: trimmed, embeds canonicalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTrack {
    pub name: String,
    pub spotify_embed: String,
    pub apple_embed: String,
    pub song_url: String,
    pub image_url: String,
}

/// Validate and normalise submitted track fields.
pub fn validate_track(fields: TrackFields<'_>) -> Result<ValidatedTrack, CoreError> {
    let name = validate_track_name(fields.name)?;

    let has_source = [fields.spotify_embed, fields.apple_embed, fields.song_url]
        .iter()
        .any(|s| !s.trim().is_empty());
    if !has_source {
        return Err(CoreError::Validation(
            "At least one music source is required (Spotify embed, Apple Music embed, or song URL)"
                .to_string(),
        ));
    }

    Ok(ValidatedTrack {
        name,
        spotify_embed: sanitize_embed(EmbedProvider::Spotify, fields.spotify_embed)?,
        apple_embed: sanitize_embed(EmbedProvider::AppleMusic, fields.apple_embed)?,
        song_url: validate_optional_http_url("songUrl", fields.song_url)?,
        image_url: validate_optional_http_url("imageUrl", fields.image_url)?,
    })
}

/// Validate a track name, returning it trimmed.
pub fn validate_track_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Track name is required".to_string()));
    }
    let len = name.chars().count();
    if len > MAX_TRACK_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Track name must be at most {MAX_TRACK_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(name.to_string())
}

/// Validate an optional link field. Empty stays empty; anything else must be
/// an absolute `http(s)` URL.
pub fn validate_optional_http_url(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    if value.len() > MAX_URL_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_URL_LEN} characters"
        )));
    }

    let url = Url::parse(value)
        .map_err(|e| CoreError::Validation(format!("{field} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(CoreError::Validation(format!(
            "{field} must be an http or https URL"
        )));
    }
    Ok(value.to_string())
}
