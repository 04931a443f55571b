// Data models — the video records that flow into the analysis.
//
// A `Record` is the flat shape the YouTube fetch layer produces and the
// shape `analyze --input` reads from disk. Optional text fields default to
// empty so the keyword pipeline never has to special-case missing data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One video's metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub video_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Either a comma-joined string or a list; both shapes show up upstream.
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u64,
}

/// Video tags in whichever shape the source delivered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Joined(String),
}

impl Tags {
    /// Individual tag strings, blanks dropped.
    ///
    /// The joined form is split on commas and each piece trimmed, so
    /// `"k-pop, music, live"` and `["k-pop", "music", "live"]` yield the
    /// same tags.
    pub fn split(&self) -> Vec<&str> {
        match self {
            Tags::List(items) => items
                .iter()
                .map(|t| t.as_str())
                .filter(|t| !t.trim().is_empty())
                .collect(),
            Tags::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// All tags as one comma-joined string (used for substring filters).
    pub fn joined(&self) -> String {
        match self {
            Tags::List(items) => items.join(","),
            Tags::Joined(joined) => joined.clone(),
        }
    }
}

impl Record {
    /// Title and description joined by a space, lowercased.
    ///
    /// This is the text the co-occurrence and clustering presence tests
    /// search. Tags are deliberately not part of it.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// Tags as individual strings (empty when the record has none).
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.as_ref().map(Tags::split).unwrap_or_default()
    }

    /// Parsed publish time, or `None` when the timestamp is malformed.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
