// YouTube Data API v3 client — trending lists and keyword search.
//
// A thin reqwest wrapper with a generic GET helper, in the same shape as the
// other HTTP clients in this codebase. Responses are mapped straight into
// flat `Record`s; nothing downstream sees the API's nested JSON.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::cache::TtlCache;
use super::errors::{validate_max_results, validate_search_query, YouTubeErrorKind};
use crate::models::{Record, Tags};

/// Default Data API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchOrder {
    #[default]
    Relevance,
    Date,
    Rating,
    ViewCount,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "relevance" => Ok(SearchOrder::Relevance),
            "date" => Ok(SearchOrder::Date),
            "rating" => Ok(SearchOrder::Rating),
            "viewCount" | "viewcount" | "views" => Ok(SearchOrder::ViewCount),
            other => anyhow::bail!(
                "Unknown search order '{other}' (expected relevance, date, rating or viewCount)"
            ),
        }
    }
}

/// Client for the public YouTube Data API (API-key auth).
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("tubetrend/0.1 (keyword-analysis)")
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET `{base_url}/{resource}` with the API key appended, classifying
    /// HTTP failures into readable errors.
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        debug!(resource = resource, "YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("YouTube API request failed: {resource}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let kind = YouTubeErrorKind::classify(status.as_u16(), &body);
            debug!(status = %status, body = body.as_str(), "YouTube API error body");
            anyhow::bail!("{} (HTTP {status} from {resource})", kind.message());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {resource} response"))
    }

    /// Most popular videos in a region, optionally within one category.
    pub async fn trending(
        &self,
        region: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Vec<Record>> {
        let max_results = validate_max_results(max_results)?.to_string();
        let mut params = vec![
            ("part", "snippet,statistics"),
            ("chart", "mostPopular"),
            ("regionCode", region),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(category) = category_id {
            params.push(("videoCategoryId", category));
        }

        let response: VideoListResponse = self.get("videos", &params).await?;
        let records: Vec<Record> = response.items.into_iter().map(Record::from).collect();

        info!(
            count = records.len(),
            region = region,
            category = category_id.unwrap_or("all"),
            "Fetched trending videos"
        );

        Ok(records)
    }

    /// Search for videos, then fetch their full details in one batch call.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Result<Vec<Record>> {
        let query = validate_search_query(query)?;
        let max_results = validate_max_results(max_results)?.to_string();

        let search: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query.as_str()),
                    ("type", "video"),
                    ("maxResults", max_results.as_str()),
                    ("order", order.as_str()),
                ],
            )
            .await?;

        let ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if ids.is_empty() {
            info!(query = query.as_str(), "Search returned no videos");
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let details: VideoListResponse = self
            .get(
                "videos",
                &[("part", "snippet,statistics"), ("id", joined.as_str())],
            )
            .await?;
        let records: Vec<Record> = details.items.into_iter().map(Record::from).collect();

        info!(
            count = records.len(),
            query = query.as_str(),
            order = order.as_str(),
            "Fetched search results"
        );

        Ok(records)
    }
}

/// Arguments that identify a fetch, used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchKey {
    Trending {
        region: String,
        max_results: u32,
        category_id: Option<String>,
    },
    Search {
        query: String,
        max_results: u32,
        order: SearchOrder,
    },
}

/// `YouTubeClient` behind a TTL cache keyed by call arguments.
pub struct CachedYouTube {
    client: YouTubeClient,
    cache: TtlCache<FetchKey, Vec<Record>>,
}

impl CachedYouTube {
    pub fn new(client: YouTubeClient, ttl: Duration) -> Self {
        Self {
            client,
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn trending(
        &self,
        region: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Vec<Record>> {
        let key = FetchKey::Trending {
            region: region.to_string(),
            max_results,
            category_id: category_id.map(str::to_string),
        };
        self.cache
            .get_or_try_insert_with(key, || {
                self.client.trending(region, max_results, category_id)
            })
            .await
    }

    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Result<Vec<Record>> {
        let key = FetchKey::Search {
            query: query.trim().to_string(),
            max_results,
            order,
        };
        self.cache
            .get_or_try_insert_with(key, || self.client.search(query, max_results, order))
            .await
    }
}

// -- Serde types for videos.list / search.list --

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    category_id: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    published_at: String,
}

/// Counters arrive as decimal strings and are omitted when hidden.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl From<VideoItem> for Record {
    fn from(item: VideoItem) -> Self {
        Record {
            video_id: item.id,
            title: item.snippet.title,
            description: item.snippet.description,
            tags: Some(Tags::List(item.snippet.tags.unwrap_or_default())),
            category_id: item.snippet.category_id,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            view_count: parse_count(item.statistics.view_count.as_deref()),
            like_count: parse_count(item.statistics.like_count.as_deref()),
            comment_count: parse_count(item.statistics.comment_count.as_deref()),
        }
    }
}
