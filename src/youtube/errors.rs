// YouTube API error classification and request validation.
//
// The Data API reports most failures as 403 with a reason string in the
// body. Classifying them up front lets the CLI print something actionable
// ("quota exceeded, try later") instead of a raw JSON error payload.

use anyhow::Result;

/// Upper bound the API accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Longest search query we send.
pub const MAX_QUERY_CHARS: usize = 100;

/// What went wrong with a YouTube API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YouTubeErrorKind {
    QuotaExceeded,
    AccessNotConfigured,
    Forbidden,
    BadRequest,
    ServerError,
    Other(u16),
}

impl YouTubeErrorKind {
    /// Classify an HTTP error status and its response body.
    pub fn classify(status: u16, body: &str) -> Self {
        match status {
            403 if body.contains("quotaExceeded") => Self::QuotaExceeded,
            403 if body.contains("accessNotConfigured") => Self::AccessNotConfigured,
            403 => Self::Forbidden,
            400 => Self::BadRequest,
            500..=599 => Self::ServerError,
            other => Self::Other(other),
        }
    }

    /// One-line explanation for the terminal.
    pub fn message(&self) -> String {
        match self {
            Self::QuotaExceeded => {
                "YouTube API quota exceeded. Try again later.".to_string()
            }
            Self::AccessNotConfigured => {
                "YouTube Data API is not enabled for this key. Enable it in the Google Cloud Console."
                    .to_string()
            }
            Self::Forbidden => "YouTube API access denied. Check your API key.".to_string(),
            Self::BadRequest => {
                "Invalid request. Check the search query and parameters.".to_string()
            }
            Self::ServerError => {
                "YouTube is having a temporary server problem. Try again shortly.".to_string()
            }
            Self::Other(status) => format!("YouTube API error ({status})."),
        }
    }
}

/// Trim and check a search query: non-blank and at most 100 characters.
pub fn validate_search_query(query: &str) -> Result<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Search query is empty");
    }
    if trimmed.chars().count() > MAX_QUERY_CHARS {
        anyhow::bail!("Search query must be at most {MAX_QUERY_CHARS} characters");
    }
    Ok(trimmed.to_string())
}

/// Check a result count is within `1..=50`.
pub fn validate_max_results(max_results: u32) -> Result<u32> {
    if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
        anyhow::bail!("max_results must be between 1 and {MAX_RESULTS_LIMIT}, got {max_results}");
    }
    Ok(max_results)
}
