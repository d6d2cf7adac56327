//! Main scraper API for YouTube trending videos
//!
//! Drives the pagination loop over the most-popular videos endpoint:
//! follows continuation cursors, waits out rate limits, and stops on
//! terminal statuses while keeping the pages fetched so far.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::client::ClientConfig;
use crate::error::Result;
use crate::params::PopularVideoParams;
use crate::types::{VideosResponse, VideosResponses};
use crate::url::build_videos_url;

/// What the loop does after one request
enum PageOutcome {
    /// 200 with a valid page
    Fetched(VideosResponse),
    /// 429, retry the same request after the configured delay
    RateLimited,
    /// Terminal status, return what we have
    Stop,
}

/// Main scraper API for the trending videos list
///
/// Holds endpoint and retry settings only. The HTTP session is owned by
/// the caller and borrowed for the duration of each fetch.
#[derive(Debug, Clone, Default)]
pub struct TrendingScraper {
    config: ClientConfig,
}

impl TrendingScraper {
    /// Create a new scraper with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new scraper with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every page of trending videos
    ///
    /// Walks the continuation cursors until a page comes back without
    /// one. A 429 is retried after a fixed delay with no retry cap.
    /// 400, 403, 404 and any other unexpected status end the walk and
    /// return the pages fetched so far, possibly none.
    ///
    /// # Returns
    /// `None` if any error escaped the loop (transport failure, malformed
    /// page). Pages fetched before the error are discarded, so `None`
    /// means nothing usable rather than zero results.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> trending_core::Result<()> {
    /// use trending_core::{build_http_client, ClientConfig, PopularVideoParams, TrendingScraper};
    /// let session = build_http_client(&ClientConfig::default())?;
    /// let params = PopularVideoParams::new("api-key", 17);
    /// if let Some(result) = TrendingScraper::new().fetch_all(&session, &params).await {
    ///     println!("fetched {} pages", result.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_all(
        &self,
        session: &reqwest::Client,
        params: &PopularVideoParams,
    ) -> Option<VideosResponses> {
        match self.try_fetch_all(session, params).await {
            Ok(responses) => Some(responses),
            Err(e) => {
                error!(error = %e, "An error occurred while fetching trending videos");
                None
            }
        }
    }

    /// Extract the video ID from a YouTube share or watch URL
    ///
    /// # Errors
    /// Returns `InvalidInput` for unrecognized URL shapes
    pub fn extract_video_id(url: &str) -> Result<String> {
        crate::url::extract_video_id(url)
    }

    async fn try_fetch_all(
        &self,
        session: &reqwest::Client,
        params: &PopularVideoParams,
    ) -> Result<VideosResponses> {
        let endpoint = build_videos_url(&self.config.base_url);
        let mut params = params.clone();
        let mut pages = Vec::new();

        loop {
            match self.fetch_page(session, &endpoint, &params).await? {
                PageOutcome::Fetched(page) => {
                    let next = page.continuation().map(str::to_string);
                    pages.push(page);
                    match next {
                        Some(token) => params.page_token = Some(token),
                        None => break,
                    }
                }
                PageOutcome::RateLimited => {
                    tokio::time::sleep(self.config.rate_limit_delay).await;
                }
                PageOutcome::Stop => break,
            }
        }

        Ok(VideosResponses::new(pages))
    }

    /// Perform a single request and classify its outcome
    async fn fetch_page(
        &self,
        session: &reqwest::Client,
        endpoint: &str,
        params: &PopularVideoParams,
    ) -> Result<PageOutcome> {
        debug!(?params, "Requesting trending videos");

        let response = session
            .get(endpoint)
            .query(&params.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let outcome = match status {
            StatusCode::OK => {
                let body: Value = response.json().await?;
                let page = VideosResponse::from_value(body)?;
                debug!(
                    items = page.items.len(),
                    has_next = page.continuation().is_some(),
                    "Successfully fetched trending videos"
                );
                PageOutcome::Fetched(page)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(
                    delay_secs = self.config.rate_limit_delay.as_secs_f64(),
                    "Rate limit exceeded, retrying after delay"
                );
                PageOutcome::RateLimited
            }
            StatusCode::FORBIDDEN => {
                error!("Access forbidden. Check your API key and permissions");
                PageOutcome::Stop
            }
            StatusCode::NOT_FOUND => {
                error!("Not found. Check the endpoint and request parameters");
                PageOutcome::Stop
            }
            StatusCode::BAD_REQUEST => {
                error!("Bad request. Check your request parameters");
                PageOutcome::Stop
            }
            other => {
                error!(status = other.as_u16(), "Failed to fetch trending videos");
                PageOutcome::Stop
            }
        };

        Ok(outcome)
    }
}
