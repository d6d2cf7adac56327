//! Request parameters for the most-popular videos endpoint
//!
//! Parameters are built once by the caller. The fetcher clones them and
//! only ever touches the clone's `page_token`.

use std::fmt;
use std::str::FromStr;

use isocountry::CountryCode;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrendingError};

/// Default number of results requested per page
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Chart selector for the trending list
pub const MOST_POPULAR_CHART: &str = "mostPopular";

/// Two-letter ISO 3166-1 region code, stored upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Validates and normalizes a region code
    ///
    /// # Errors
    /// Returns `InvalidRegion` unless `code` is an assigned alpha-2 code
    /// (case-insensitive).
    pub fn new(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TrendingError::InvalidRegion(code.to_string()));
        }

        let upper = trimmed.to_ascii_uppercase();
        if CountryCode::for_alpha2(&upper).is_err() {
            return Err(TrendingError::InvalidRegion(code.to_string()));
        }

        Ok(Self(upper))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self("ID".to_string())
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = TrendingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RegionCode {
    type Error = TrendingError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = TrendingError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

/// Query parameters for the most-popular videos request
///
/// `key` and `video_category_id` are mandatory; everything else has a
/// default. `page_token` is `None` on the first request.
#[derive(Clone, PartialEq, Eq)]
pub struct PopularVideoParams {
    pub region_code: RegionCode,
    pub video_category_id: u32,
    pub max_results: u32,
    pub page_token: Option<String>,
    pub chart: Option<String>,
    pub key: String,
}

impl PopularVideoParams {
    /// Create parameters for the first page with default region, page size and chart
    pub fn new(key: impl Into<String>, video_category_id: u32) -> Self {
        Self {
            region_code: RegionCode::default(),
            video_category_id,
            max_results: DEFAULT_MAX_RESULTS,
            page_token: None,
            chart: Some(MOST_POPULAR_CHART.to_string()),
            key: key.into(),
        }
    }

    pub fn with_region(mut self, region_code: RegionCode) -> Self {
        self.region_code = region_code;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    /// Override the chart selector; `None` or a blank value leaves it off the request
    pub fn with_chart(mut self, chart: Option<String>) -> Self {
        self.chart = chart.filter(|c| !c.trim().is_empty());
        self
    }

    /// Serializes the parameters into wire-named query pairs
    ///
    /// Fields holding `None` are dropped rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("regionCode", self.region_code.to_string()),
            ("videoCategoryId", self.video_category_id.to_string()),
            ("maxResults", self.max_results.to_string()),
        ];

        if let Some(token) = &self.page_token {
            pairs.push(("pageToken", token.clone()));
        }
        if let Some(chart) = &self.chart {
            pairs.push(("chart", chart.clone()));
        }

        pairs.push(("key", self.key.clone()));
        pairs
    }
}

impl fmt::Debug for PopularVideoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopularVideoParams")
            .field("region_code", &self.region_code)
            .field("video_category_id", &self.video_category_id)
            .field("max_results", &self.max_results)
            .field("page_token", &self.page_token)
            .field("chart", &self.chart)
            .field("key", &"<redacted>")
            .finish()
    }
}
