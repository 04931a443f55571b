// Full analysis of one batch — every view the CLI renders, in one struct.
//
// The command handlers fetch or load a batch, filter it, then call
// `analyze_batch`; the result is either printed with the terminal renderers
// or serialized as a JSON report.

use anyhow::Result;
use serde::Serialize;

use super::clusters::{cluster_keywords, KeywordCluster};
use super::extract::KeywordExtractor;
use super::frequency::{rank_keywords, FrequencyTable};
use super::network::{build_cooccurrence_graph, KeywordGraph};
use super::params::{ClusterParams, NetworkParams};
use super::summary::{
    batch_overview, category_distribution, channel_stats, BatchOverview, CategoryCount,
    ChannelStats,
};
use super::tfidf::tfidf_scores;
use crate::models::Record;

/// Knobs for a full batch analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub min_length: usize,
    /// Size of the ranked keyword table.
    pub max_keywords: usize,
    pub network: NetworkParams,
    pub clusters: ClusterParams,
    /// How many TF-IDF keywords to keep; 0 skips TF-IDF.
    pub top_tfidf: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        let network = NetworkParams::default();
        Self {
            min_length: network.min_length,
            max_keywords: crate::lexicon::MAX_KEYWORDS,
            network,
            clusters: ClusterParams::default(),
            top_tfidf: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfidfKeyword {
    pub keyword: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub videos: usize,
    pub overview: BatchOverview,
    pub keywords: FrequencyTable,
    /// `None` when the batch yields no keywords.
    pub network: Option<KeywordGraph>,
    pub clusters: Vec<KeywordCluster>,
    pub tfidf: Vec<TfidfKeyword>,
    pub categories: Vec<CategoryCount>,
    pub channels: Vec<ChannelStats>,
}

/// Run every analysis over `records`.
pub fn analyze_batch(
    extractor: &KeywordExtractor,
    records: &[Record],
    options: &ReportOptions,
) -> Result<AnalysisReport> {
    let keywords = rank_keywords(
        extractor,
        records,
        options.min_length,
        Some(options.max_keywords),
    )?;
    let network = build_cooccurrence_graph(extractor, records, &options.network)?
        .map(|(graph, _)| graph);
    let clusters = cluster_keywords(extractor, records, &options.clusters)?;

    let tfidf = if options.top_tfidf == 0 {
        Vec::new()
    } else {
        let texts: Vec<String> = records.iter().map(Record::combined_text).collect();
        tfidf_scores(extractor, &texts, options.min_length, options.top_tfidf)
            .into_iter()
            .map(|(keyword, score)| TfidfKeyword { keyword, score })
            .collect()
    };

    Ok(AnalysisReport {
        videos: records.len(),
        overview: batch_overview(records),
        keywords,
        network,
        clusters,
        tfidf,
        categories: category_distribution(records),
        channels: channel_stats(records),
    })
}
