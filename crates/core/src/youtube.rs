//! YouTube link parsing.
//!
//! Turns whatever link the admin copied (watch page, short link, Shorts,
//! embed URL) into a video id, and derives the player and thumbnail URLs
//! the landing page renders.

use url::Url;

use crate::error::CoreError;

pub const MAX_VIDEO_ID_LEN: usize = 64;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi/";

const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
];
const SHORT_LINK_HOST: &str = "youtu.be";

/// Path prefixes that carry the video id as the next segment.
const ID_PATH_PREFIXES: &[&str] = &["embed", "shorts", "live", "v"];

/// A parsed YouTube link and the URLs derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeLink {
    pub video_id: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

/// Parse a YouTube URL into a [`YoutubeLink`].
///
/// Fails with [`CoreError::Validation`] when the URL is not a recognisable
/// YouTube video link.
pub fn parse_youtube_url(raw: &str) -> Result<YoutubeLink, CoreError> {
    let raw = raw.trim();
    let video_id = extract_video_id(raw).ok_or_else(|| {
        CoreError::Validation(format!("'{raw}' is not a recognizable YouTube video URL"))
    })?;

    Ok(YoutubeLink {
        embed_url: format!("{EMBED_BASE}{video_id}"),
        thumbnail_url: format!("{THUMBNAIL_BASE}{video_id}/hqdefault.jpg"),
        video_id,
    })
}

fn extract_video_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let candidate = if host == SHORT_LINK_HOST {
        segments.next()?.to_string()
    } else if YOUTUBE_HOSTS.contains(&host.as_str()) {
        match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())?,
            prefix if ID_PATH_PREFIXES.contains(&prefix) => segments.next()?.to_string(),
            _ => return None,
        }
    } else {
        return None;
    };

    is_valid_video_id(&candidate).then_some(candidate)
}

/// Video ids are URL-safe base64 characters.
pub fn is_valid_video_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn id_of(url: &str) -> String {
        parse_youtube_url(url).unwrap().video_id
    }

    #[test]
    fn watch_url_derives_embed_and_thumbnail() {
        let link = parse_youtube_url("https://www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(link.video_id, "abc123");
        assert_eq!(link.embed_url, "https://www.youtube.com/embed/abc123");
        assert_eq!(link.thumbnail_url, "https://img.youtube.com/vi/abc123/hqdefault.jpg");
    }

    #[test]
    fn recognises_common_link_shapes() {
        assert_eq!(id_of("https://youtu.be/abc123"), "abc123");
        assert_eq!(id_of("https://youtu.be/abc123?t=42"), "abc123");
        assert_eq!(id_of("https://www.youtube.com/shorts/abc123"), "abc123");
        assert_eq!(id_of("https://www.youtube.com/embed/abc123"), "abc123");
        assert_eq!(id_of("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(id_of("http://youtube.com/live/x_y-Z"), "x_y-Z");
        assert_eq!(id_of("  https://music.youtube.com/watch?v=abc123&list=RD  "), "abc123");
    }

    #[test]
    fn rejects_non_youtube_urls() {
        for bad in [
            "",
            "not a url",
            "https://vimeo.com/123456",
            "https://www.youtube.com/",
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?list=abc",
            "https://www.youtube.com/@xboybx",
            "ftp://youtu.be/abc123",
            "https://youtu.be/",
            "https://notyoutube.com/watch?v=abc123",
        ] {
            assert_matches!(
                parse_youtube_url(bad),
                Err(CoreError::Validation(_)),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_ids_with_unsafe_characters() {
        assert_matches!(
            parse_youtube_url("https://www.youtube.com/watch?v=abc%22onload%3D1"),
            Err(CoreError::Validation(_))
        );
        assert!(!is_valid_video_id(&"a".repeat(MAX_VIDEO_ID_LEN + 1)));
    }
}
