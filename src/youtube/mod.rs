pub mod cache;
pub mod client;
pub mod errors;

pub use cache::TtlCache;
pub use client::{CachedYouTube, FetchKey, SearchOrder, YouTubeClient, DEFAULT_API_URL};
pub use errors::YouTubeErrorKind;
