//! JSON output for fetched trending videos
//!
//! Writes the aggregate as `{"data": [...]}` with four-space indentation.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{Result, TrendingError};
use crate::types::VideosResponses;

/// Serialize the aggregate to a pretty-printed JSON string
///
/// # Errors
/// Returns `Serialization` if the value cannot be encoded
pub fn to_json_string(responses: &VideosResponses) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    responses
        .serialize(&mut serializer)
        .map_err(TrendingError::Serialization)?;

    String::from_utf8(buf)
        .map_err(|e| TrendingError::Serialization(serde_json::Error::custom(e)))
}

/// Write the aggregate to `path`, replacing any existing file
///
/// # Errors
/// - `Serialization` if encoding fails
/// - `Io` if the file cannot be written
pub fn write_json(path: impl AsRef<Path>, responses: &VideosResponses) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(responses)?;
    fs::write(path, json)?;

    info!(
        path = %path.display(),
        pages = responses.len(),
        items = responses.items().count(),
        "Wrote trending videos"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, PageInfo, VideosResponse};

    fn sample() -> VideosResponses {
        VideosResponses::new(vec![VideosResponse {
            kind: "youtube#videoListResponse".to_string(),
            etag: "Ünïcödé".to_string(),
            items: vec![Item {
                kind: "youtube#video".to_string(),
                etag: "e1".to_string(),
                id: "abc123".to_string(),
            }],
            next_page_token: Some("tok2".to_string()),
            page_info: PageInfo {
                total_results: 1,
                results_per_page: 1,
            },
        }])
    }

    #[test]
    fn test_to_json_string_uses_wire_names_and_indent() {
        let json = to_json_string(&sample()).unwrap();

        assert!(json.starts_with("{\n    \"data\": ["));
        assert!(json.contains("\"nextPageToken\": \"tok2\""));
        assert!(json.contains("\"pageInfo\""));
        assert!(json.contains("\"totalResults\": 1"));
        // Non-ASCII kept as-is
        assert!(json.contains("Ünïcödé"));
    }

    #[test]
    fn test_empty_aggregate_json() {
        let json = to_json_string(&VideosResponses::default()).unwrap();
        assert_eq!(json, "{\n    \"data\": []\n}");
    }

    #[test]
    fn test_write_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trending_videos.json");

        write_json(&path, &sample()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: VideosResponses = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        assert!(matches!(
            write_json(&path, &sample()),
            Err(TrendingError::Io(_))
        ));
    }
}
