//! Error types for the trending videos scraper
//!
//! Provides a comprehensive error enum with human-readable messages
//! and string serialization for callers that forward errors as JSON.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all trending scraper operations
///
/// Rate limiting and terminal HTTP statuses are not represented here:
/// the fetch loop handles them in place and never surfaces them.
#[derive(Error, Debug)]
pub enum TrendingError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Page payload is missing a required field or has a mistyped one
    #[error("Invalid response payload: {0}")]
    ValidationError(String),

    /// Malformed input passed to a helper (e.g. an unrecognized video URL)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Region code is not an ISO 3166-1 alpha-2 code
    #[error("Invalid region code: {0}")]
    InvalidRegion(String),

    /// Required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize output
    #[error("Serialization failed: {0}")]
    Serialization(serde_json::Error),
}

impl Serialize for TrendingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for trending scraper operations
pub type Result<T> = std::result::Result<T, TrendingError>;
