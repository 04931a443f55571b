use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::lexicon::{MAX_KEYWORDS, MIN_WORD_LENGTH};
use crate::youtube::DEFAULT_API_URL;

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub youtube_api_key: String,
    /// Data API endpoint (defaults to https://www.googleapis.com/youtube/v3).
    pub youtube_api_url: String,
    /// ISO 3166 region code for trending lists.
    pub region: String,
    pub max_results: u32,
    /// How long fetched batches stay cached.
    pub cache_ttl: Duration,
    pub min_word_length: usize,
    pub max_keywords: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default; the key is only
    /// needed for commands that talk to YouTube.
    pub fn load() -> Result<Self> {
        Ok(Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            youtube_api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            region: env::var("TUBETREND_REGION").unwrap_or_else(|_| "KR".to_string()),
            max_results: parse_var("TUBETREND_MAX_RESULTS", 50)?,
            cache_ttl: Duration::from_secs(parse_var("TUBETREND_CACHE_TTL", 3600)?),
            min_word_length: parse_var("TUBETREND_MIN_WORD_LENGTH", MIN_WORD_LENGTH)?,
            max_keywords: parse_var("TUBETREND_MAX_KEYWORDS", MAX_KEYWORDS)?,
        })
    }

    /// Check that a plausible YouTube API key is configured.
    /// Call this before any operation that hits the Data API.
    pub fn require_api_key(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        if !self.youtube_api_key.starts_with("AIza") {
            anyhow::bail!(
                "YOUTUBE_API_KEY does not look like a Google API key (expected it to start with 'AIza')."
            );
        }
        Ok(())
    }
}

/// Read an optional numeric env var, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            youtube_api_key: key.to_string(),
            youtube_api_url: DEFAULT_API_URL.to_string(),
            region: "KR".to_string(),
            max_results: 50,
            cache_ttl: Duration::from_secs(3600),
            min_word_length: MIN_WORD_LENGTH,
            max_keywords: MAX_KEYWORDS,
        }
    }

    #[test]
    fn test_require_api_key() {
        assert!(config_with_key("").require_api_key().is_err());
        assert!(config_with_key("not-a-key").require_api_key().is_err());
        assert!(config_with_key("AIzaSyExample").require_api_key().is_ok());
    }

    #[test]
    fn test_parse_var_default_when_unset() {
        let value: u32 = parse_var("TUBETREND_TEST_SURELY_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
