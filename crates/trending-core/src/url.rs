//! URL helper functions for YouTube
//!
//! Provides the API endpoint constants, video URL builders, and
//! video ID extraction from share and watch URLs.

use url::Url;

use crate::error::{Result, TrendingError};

/// Base URL of the YouTube Data API
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com";

/// Path of the videos list endpoint
pub const POPULAR_VIDEOS_PATH: &str = "/youtube/v3/videos";

const SHORT_HOSTS: &[&str] = &["youtu.be", "www.youtu.be"];
const WATCH_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "m.youtube.com"];

/// Builds the full endpoint URL for the videos list on a given API base
///
/// # Example
/// ```
/// use trending_core::url::build_videos_url;
/// let url = build_videos_url("https://www.googleapis.com/");
/// assert_eq!(url, "https://www.googleapis.com/youtube/v3/videos");
/// ```
pub fn build_videos_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), POPULAR_VIDEOS_PATH)
}

/// Builds the canonical watch URL for a video ID
///
/// # Example
/// ```
/// use trending_core::url::build_watch_url;
/// assert_eq!(build_watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
/// ```
pub fn build_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Builds the short share URL for a video ID
///
/// # Example
/// ```
/// use trending_core::url::build_short_url;
/// assert_eq!(build_short_url("abc123"), "https://youtu.be/abc123");
/// ```
pub fn build_short_url(video_id: &str) -> String {
    format!("https://youtu.be/{}", video_id)
}

/// Extracts the video ID from a YouTube share or watch URL
///
/// Accepts `https://youtu.be/<id>` (trailing path segment) and
/// `https://www.youtube.com/watch?v=<id>` (the `v` parameter; anything
/// after it is ignored). A missing scheme is tolerated.
///
/// # Errors
/// Returns `InvalidInput` for any other URL shape.
///
/// # Example
/// ```
/// use trending_core::url::extract_video_id;
/// assert_eq!(extract_video_id("https://youtu.be/abc123").unwrap(), "abc123");
/// assert_eq!(
///     extract_video_id("https://www.youtube.com/watch?v=abc123&t=5").unwrap(),
///     "abc123"
/// );
/// assert!(extract_video_id("https://example.com/x").is_err());
/// ```
pub fn extract_video_id(url: &str) -> Result<String> {
    let invalid = || TrendingError::InvalidInput(format!("Invalid YouTube URL: {}", url));

    let trimmed = url.trim();
    let parsed = match Url::parse(trimmed) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed)).map_err(|_| invalid())?
        }
        Err(_) => return Err(invalid()),
    };

    let host = parsed.host_str().ok_or_else(invalid)?;

    let id = if SHORT_HOSTS.contains(&host) {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string)
    } else if WATCH_HOSTS.contains(&host) && parsed.path() == "/watch" {
        parsed
            .query_pairs()
            .find(|(name, _)| name == "v")
            .map(|(_, value)| value.into_owned())
    } else {
        None
    };

    id.filter(|id| !id.is_empty()).ok_or_else(invalid)
}
