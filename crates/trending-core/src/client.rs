//! HTTP client configuration for the YouTube Data API
//!
//! Builds the reusable `reqwest::Client` session that callers own and
//! lend to the fetcher, and holds the endpoint and rate-limit settings.

use std::time::Duration;

use crate::error::{Result, TrendingError};
use crate::url::YOUTUBE_API_BASE;

const USER_AGENT: &str = concat!("trending-scraper/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client and fetch loop
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: `https://www.googleapis.com`)
    pub base_url: String,
    /// Fixed wait after a 429 before the identical request is retried (default: 5s)
    pub rate_limit_delay: Duration,
    /// Per-request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: YOUTUBE_API_BASE.to_string(),
            rate_limit_delay: Duration::from_secs(5),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Point the fetcher at a different API base (e.g. a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Build an HTTP session suitable for passing to
/// [`TrendingScraper::fetch_all`](crate::TrendingScraper::fetch_all)
///
/// # Errors
/// Returns `HttpError` if the underlying client cannot be initialized
pub fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        });

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().map_err(TrendingError::HttpError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.googleapis.com");
        assert_eq!(config.rate_limit_delay, Duration::from_secs(5));
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("trending-scraper/"));
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9999")
            .with_rate_limit_delay(Duration::from_millis(10))
            .with_timeout_secs(30);

        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.rate_limit_delay, Duration::from_millis(10));
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_build_http_client_with_timeout() {
        let config = ClientConfig::default().with_timeout_secs(60);
        assert!(build_http_client(&config).is_ok());
    }
}
