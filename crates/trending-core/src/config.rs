//! Configuration and secrets
//!
//! Settings are loaded once and passed explicitly; there is no global
//! instance. Values come from the process environment after an optional
//! `.env` file has been merged in.

use tracing::debug;

use crate::error::{Result, TrendingError};

/// Environment variable prefix for YouTube API settings
pub const YOUTUBE_ENV_PREFIX: &str = "YOUTUBE_API_";

/// YouTube Data API credentials
#[derive(Clone, PartialEq, Eq)]
pub struct YoutubeApiSettings {
    pub key: String,
}

impl std::fmt::Debug for YoutubeApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeApiSettings")
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub youtube: YoutubeApiSettings,
}

impl Settings {
    /// Load settings from `.env` (if present) and the environment
    ///
    /// # Errors
    /// Returns `MissingConfig` if `YOUTUBE_API_KEY` is unset or empty
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_vars(std::env::vars())
    }

    /// Build settings from an explicit set of variables
    ///
    /// Variable names are matched case-insensitively.
    ///
    /// # Errors
    /// Returns `MissingConfig` if no non-empty API key is present
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let wanted = format!("{}KEY", YOUTUBE_ENV_PREFIX);
        let key = vars
            .into_iter()
            .find(|(name, _)| name.as_ref().eq_ignore_ascii_case(&wanted))
            .map(|(_, value)| Into::<String>::into(value))
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| TrendingError::MissingConfig(wanted.clone()))?;

        Ok(Self {
            youtube: YoutubeApiSettings { key },
        })
    }
}
