//! Response model for the YouTube videos list endpoint
//!
//! Typed representation of one fetched page and of the aggregated
//! multi-page result. Field names follow the wire format on both
//! deserialization and serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TrendingError};

/// A single entry in a page's `items` list
///
/// Opaque to the fetcher: only the tags and the identifier are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Resource kind (e.g., "youtube#video")
    pub kind: String,

    /// Entity tag of the resource
    pub etag: String,

    /// Video ID
    pub id: String,
}

/// Paging metadata attached to every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of results across all pages
    pub total_results: u64,

    /// Number of results included in this page
    pub results_per_page: u64,
}

/// One page returned by the videos list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosResponse {
    pub kind: String,

    pub etag: String,

    pub items: Vec<Item>,

    /// Continuation cursor, present only when more pages exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    pub page_info: PageInfo,
}

impl VideosResponse {
    /// Validates a raw JSON payload and parses it into a page
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    /// Returns `ValidationError` if a required field is missing or has
    /// the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| TrendingError::ValidationError(e.to_string()))
    }

    /// Cursor for the next page, if any
    ///
    /// An empty token is treated as absent.
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Ordered collection of every page fetched by one pagination run
///
/// Pages are kept in fetch order, first page first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideosResponses {
    pub data: Vec<VideosResponse>,
}

impl VideosResponses {
    pub fn new(data: Vec<VideosResponse>) -> Self {
        Self { data }
    }

    /// Fetched pages in order
    pub fn pages(&self) -> &[VideosResponse] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the items of every page, in page order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.data.iter().flat_map(|page| page.items.iter())
    }

    pub fn into_pages(self) -> Vec<VideosResponse> {
        self.data
    }
}

impl From<Vec<VideosResponse>> for VideosResponses {
    fn from(data: Vec<VideosResponse>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page(token: Option<&str>) -> Value {
        let mut page = json!({
            "kind": "youtube#videoListResponse",
            "etag": "etag-page",
            "items": [
                {"kind": "youtube#video", "etag": "etag-1", "id": "vid1"},
                {"kind": "youtube#video", "etag": "etag-2", "id": "vid2"}
            ],
            "pageInfo": {"totalResults": 200, "resultsPerPage": 2}
        });
        if let Some(token) = token {
            page["nextPageToken"] = json!(token);
        }
        page
    }

    #[test]
    fn test_parse_page_with_cursor() {
        let page = VideosResponse::from_value(sample_page(Some("CAUQAA"))).unwrap();

        assert_eq!(page.kind, "youtube#videoListResponse");
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, "vid2");
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.continuation(), Some("CAUQAA"));
        assert_eq!(
            page.page_info,
            PageInfo {
                total_results: 200,
                results_per_page: 2
            }
        );
    }

    #[test]
    fn test_parse_last_page_has_no_continuation() {
        let page = VideosResponse::from_value(sample_page(None)).unwrap();
        assert_eq!(page.next_page_token, None);
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn test_empty_token_is_not_a_continuation() {
        let page = VideosResponse::from_value(sample_page(Some(""))).unwrap();
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut raw = sample_page(None);
        raw["regionCode"] = json!("ID");
        raw["items"][0]["snippet"] = json!({"title": "ignored"});

        let page = VideosResponse::from_value(raw).unwrap();
        assert_eq!(page.items[0].id, "vid1");
    }

    #[test]
    fn test_missing_items_is_validation_error() {
        let mut raw = sample_page(None);
        raw.as_object_mut().unwrap().remove("items");

        let result = VideosResponse::from_value(raw);
        match result {
            Err(TrendingError::ValidationError(msg)) => assert!(msg.contains("items")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_item_is_validation_error() {
        let mut raw = sample_page(None);
        raw["items"] = json!(["not-an-object"]);

        assert!(matches!(
            VideosResponse::from_value(raw),
            Err(TrendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_non_numeric_page_info_is_validation_error() {
        let mut raw = sample_page(None);
        raw["pageInfo"]["totalResults"] = json!("lots");

        assert!(matches!(
            VideosResponse::from_value(raw),
            Err(TrendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_negative_count_is_validation_error() {
        let mut raw = sample_page(None);
        raw["pageInfo"]["resultsPerPage"] = json!(-1);

        assert!(matches!(
            VideosResponse::from_value(raw),
            Err(TrendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_page_serializes_with_wire_names() {
        let page = VideosResponse::from_value(sample_page(Some("next"))).unwrap();
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["nextPageToken"], "next");
        assert_eq!(value["pageInfo"]["totalResults"], 200);
        assert_eq!(value["pageInfo"]["resultsPerPage"], 2);
        assert!(value.get("next_page_token").is_none());
    }

    #[test]
    fn test_last_page_omits_cursor_when_serialized() {
        let page = VideosResponse::from_value(sample_page(None)).unwrap();
        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("nextPageToken").is_none());
    }

    #[test]
    fn test_aggregate_keeps_fetch_order() {
        let first = VideosResponse::from_value(sample_page(Some("p2"))).unwrap();
        let mut second = VideosResponse::from_value(sample_page(None)).unwrap();
        second.etag = "etag-second".to_string();

        let responses = VideosResponses::new(vec![first, second]);

        assert_eq!(responses.len(), 2);
        assert!(!responses.is_empty());
        assert_eq!(responses.pages()[0].continuation(), Some("p2"));
        assert_eq!(responses.pages()[1].etag, "etag-second");
        assert_eq!(responses.items().count(), 4);

        let value = serde_json::to_value(&responses).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_aggregate() {
        let responses = VideosResponses::default();
        assert!(responses.is_empty());
        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!({"data": []})
        );
    }
}
