//! YouTube Trending Videos Scraper Core Library
//!
//! Provides an async API for fetching every page of the YouTube
//! "most popular" videos chart and saving the result as JSON.
//!
//! # Overview
//!
//! - Typed response model with validation of each fetched page
//! - Pagination loop that follows continuation cursors, waits out
//!   rate limits and keeps partial results on terminal HTTP statuses
//! - Helpers for video URLs, JSON output and API key configuration
//!
//! # Example
//!
//! ```no_run
//! use trending_core::{
//!     build_http_client, write_json, ClientConfig, PopularVideoParams, RegionCode, Result,
//!     Settings, TrendingScraper,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = Settings::from_env()?;
//!     let session = build_http_client(&ClientConfig::default())?;
//!
//!     let params = PopularVideoParams::new(settings.youtube.key, 17)
//!         .with_region(RegionCode::new("ID")?);
//!
//!     // `None` means the fetch failed and nothing is usable
//!     if let Some(result) = TrendingScraper::new().fetch_all(&session, &params).await {
//!         write_json("trending_videos.json", &result)?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate limiting
//!
//! A 429 response is retried after a fixed delay
//! ([`ClientConfig::rate_limit_delay`], 5 seconds by default) with no
//! retry cap, so sustained rate limiting stalls the fetch.

mod client;
mod config;
mod error;
pub mod output;
mod params;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, build_http_client};

// Re-export configuration
pub use config::{Settings, YoutubeApiSettings};

// Re-export error types
pub use error::{Result, TrendingError};

// Re-export output helpers
pub use output::{to_json_string, write_json};

// Re-export request parameters
pub use params::{DEFAULT_MAX_RESULTS, MOST_POPULAR_CHART, PopularVideoParams, RegionCode};

// Re-export main scraper API
pub use scraper::TrendingScraper;

// Re-export data types
pub use types::{Item, PageInfo, VideosResponse, VideosResponses};

// Re-export URL helper functions for convenience
pub use crate::url::{build_short_url, build_watch_url, extract_video_id};
