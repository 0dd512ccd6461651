//! Sanitisation of third-party player embeds (Spotify, Apple Music).
//!
//! Admins paste whatever the provider's "share > embed" dialog hands them:
//! usually an `<iframe>` snippet, sometimes just the player or share URL.
//! Nothing pasted is ever stored verbatim. The player URL is extracted,
//! checked against the provider's host, and the stored markup is rebuilt
//! from that URL alone, so attributes, scripts and foreign hosts never
//! reach the landing page.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::CoreError;

/// Markup must be exactly one empty `<iframe>` element.
static IFRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^<iframe\b([^<>]*)>\s*</iframe>$").expect("valid regex")
});

static SRC_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)src\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

const SPOTIFY_HOST: &str = "open.spotify.com";
const APPLE_EMBED_HOST: &str = "embed.music.apple.com";
const APPLE_SHARE_HOST: &str = "music.apple.com";

/// Spotify share-link resource kinds that have an embeddable player.
const SPOTIFY_KINDS: &[&str] = &["track", "album", "playlist", "artist", "episode", "show"];

const SPOTIFY_LOCALE_PREFIX: &str = "intl-";

const SPOTIFY_IFRAME_HEIGHT: u32 = 152;
const APPLE_IFRAME_HEIGHT: u32 = 175;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedProvider {
    Spotify,
    AppleMusic,
}

impl EmbedProvider {
    /// Human-readable name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            EmbedProvider::Spotify => "Spotify",
            EmbedProvider::AppleMusic => "Apple Music",
        }
    }
}

/// Sanitise a pasted embed for `provider`.
///
/// Empty (or whitespace-only) input yields an empty string. Anything else
/// either becomes canonical iframe markup pointing at a validated player
/// URL, or fails with [`CoreError::Validation`].
pub fn sanitize_embed(provider: EmbedProvider, raw: &str) -> Result<String, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }

    let src = if raw.starts_with('<') {
        extract_iframe_src(provider, raw)?
    } else {
        raw.to_string()
    };

    let player = player_url(provider, &src)?;
    Ok(render_iframe(provider, &player))
}

/// Extract the player URL out of stored or pasted iframe markup.
///
/// Returns `None` for anything that is not a single iframe with a `src`.
pub fn embed_src(markup: &str) -> Option<String> {
    let attrs = IFRAME_RE.captures(markup.trim())?.get(1)?.as_str();
    let caps = SRC_ATTR_RE.captures(attrs)?;
    let value = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(value.replace("&amp;", "&"))
}

fn extract_iframe_src(provider: EmbedProvider, markup: &str) -> Result<String, CoreError> {
    if !IFRAME_RE.is_match(markup) {
        return Err(CoreError::Validation(format!(
            "{} embed must be a single <iframe> element or a player URL",
            provider.label()
        )));
    }
    embed_src(markup).ok_or_else(|| {
        CoreError::Validation(format!(
            "{} embed <iframe> has no src attribute",
            provider.label()
        ))
    })
}

/// Validate `src` for `provider` and normalise it to the player URL.
fn player_url(provider: EmbedProvider, src: &str) -> Result<Url, CoreError> {
    let invalid = |detail: &str| {
        CoreError::Validation(format!(
            "Invalid {} embed URL '{src}': {detail}",
            provider.label()
        ))
    };

    let mut url = Url::parse(src).map_err(|e| invalid(&e.to_string()))?;
    if url.scheme() != "https" {
        return Err(invalid("must use https"));
    }
    url.set_fragment(None);

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match provider {
        EmbedProvider::Spotify => {
            if host != SPOTIFY_HOST {
                return Err(invalid("host must be open.spotify.com"));
            }
            let segments: Vec<String> = url
                .path_segments()
                .map(|s| {
                    s.filter(|p| !p.is_empty())
                        // Localised share links carry an `intl-xx` prefix.
                        .skip_while(|p| p.starts_with(SPOTIFY_LOCALE_PREFIX))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            let (kind, id) = match segments.as_slice() {
                [embed, kind, id, ..] if embed == "embed" => (kind, id),
                [kind, id, ..] => (kind, id),
                _ => return Err(invalid("expected /embed/<kind>/<id>")),
            };
            if !SPOTIFY_KINDS.contains(&kind.as_str()) {
                return Err(invalid(&format!("unsupported Spotify resource '{kind}'")));
            }
            url.set_path(&format!("/embed/{kind}/{id}"));
        }
        EmbedProvider::AppleMusic => {
            if host == APPLE_SHARE_HOST {
                url.set_host(Some(APPLE_EMBED_HOST))
                    .map_err(|e| invalid(&e.to_string()))?;
            } else if host != APPLE_EMBED_HOST {
                return Err(invalid("host must be embed.music.apple.com"));
            }
            if url.path().trim_matches('/').is_empty() {
                return Err(invalid("missing album or song path"));
            }
        }
    }
    Ok(url)
}

fn render_iframe(provider: EmbedProvider, url: &Url) -> String {
    let src = url.as_str().replace('&', "&amp;");
    match provider {
        EmbedProvider::Spotify => format!(
            r#"<iframe src="{src}" width="100%" height="{SPOTIFY_IFRAME_HEIGHT}" frameborder="0" allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture" loading="lazy"></iframe>"#
        ),
        EmbedProvider::AppleMusic => format!(
            r#"<iframe src="{src}" width="100%" height="{APPLE_IFRAME_HEIGHT}" frameborder="0" allow="autoplay *; encrypted-media *; fullscreen *; clipboard-write" sandbox="allow-forms allow-popups allow-same-origin allow-scripts allow-top-navigation-by-user-activation" loading="lazy"></iframe>"#
        ),
    }
}
