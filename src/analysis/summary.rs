// Batch summaries — totals, category distribution and per-channel statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lexicon::category_name;
use crate::models::Record;

/// How many videos fall into one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category_id: String,
    pub name: String,
    pub videos: usize,
}

/// Aggregate numbers for one channel in the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelStats {
    pub channel: String,
    pub videos: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub average_views: f64,
    /// Earliest and latest parseable publish time; `None` when no video of
    /// the channel has one.
    pub first_upload: Option<DateTime<Utc>>,
    pub latest_upload: Option<DateTime<Utc>>,
}

/// Batch-wide totals and per-video means.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOverview {
    pub videos: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub average_views: f64,
    pub average_likes: f64,
    pub average_comments: f64,
}

/// Totals and means over the whole batch. An empty batch is all zeros.
pub fn batch_overview(records: &[Record]) -> BatchOverview {
    if records.is_empty() {
        return BatchOverview::default();
    }

    let total_views: u64 = records.iter().map(|r| r.view_count).sum();
    let total_likes: u64 = records.iter().map(|r| r.like_count).sum();
    let total_comments: u64 = records.iter().map(|r| r.comment_count).sum();
    let n = records.len() as f64;

    BatchOverview {
        videos: records.len(),
        total_views,
        total_likes,
        total_comments,
        average_views: total_views as f64 / n,
        average_likes: total_likes as f64 / n,
        average_comments: total_comments as f64 / n,
    }
}

/// Videos per category, most common first; ties keep first appearance.
pub fn category_distribution(records: &[Record]) -> Vec<CategoryCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let id = record.category_id.as_str();
        let count = counts.entry(id).or_insert_with(|| {
            order.push(id);
            0
        });
        *count += 1;
    }

    let mut distribution: Vec<CategoryCount> = order
        .into_iter()
        .map(|id| CategoryCount {
            category_id: id.to_string(),
            name: category_name(id),
            videos: counts[id],
        })
        .collect();
    distribution.sort_by(|a, b| b.videos.cmp(&a.videos));
    distribution
}

/// Per-channel totals, sorted by total views descending.
///
/// Records with a blank channel title are left out.
pub fn channel_stats(records: &[Record]) -> Vec<ChannelStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<ChannelStats> = Vec::new();

    for record in records.iter().filter(|r| !r.channel_title.trim().is_empty()) {
        let slot = *index.entry(record.channel_title.as_str()).or_insert_with(|| {
            stats.push(ChannelStats {
                channel: record.channel_title.clone(),
                videos: 0,
                total_views: 0,
                total_likes: 0,
                total_comments: 0,
                average_views: 0.0,
                first_upload: None,
                latest_upload: None,
            });
            stats.len() - 1
        });
        let entry = &mut stats[slot];
        entry.videos += 1;
        entry.total_views += record.view_count;
        entry.total_likes += record.like_count;
        entry.total_comments += record.comment_count;

        if let Some(published) = record.published() {
            entry.first_upload = Some(entry.first_upload.map_or(published, |t| t.min(published)));
            entry.latest_upload = Some(entry.latest_upload.map_or(published, |t| t.max(published)));
        }
    }

    for entry in &mut stats {
        entry.average_views = entry.total_views as f64 / entry.videos as f64;
    }
    stats.sort_by(|a, b| b.total_views.cmp(&a.total_views));
    stats
}
