// Keyword clustering by presence-set similarity.
//
// Each vocabulary keyword has a presence set (the records that mention it).
// Clusters are built greedily in frequency order: an unassigned keyword
// seeds a cluster and pulls in every other unassigned keyword whose Jaccard
// similarity *to the seed* reaches the threshold. Members are never compared
// with each other. Seeds that attract nobody are dropped.

use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::extract::KeywordExtractor;
use super::frequency::FrequencyTable;
use super::params::ClusterParams;
use super::presence::{jaccard, presence_sets};
use crate::models::Record;

/// A group of keywords that tend to appear in the same videos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCluster {
    /// Seed first, then members in vocabulary order.
    pub keywords: Vec<String>,
    pub size: usize,
    /// Mean batch-wide frequency of the members.
    pub average_frequency: f64,
}

/// Greedy seed-based clustering over an already-ranked vocabulary.
///
/// `sets[i]` is the presence set of the i-th table entry. Clusters come back
/// sorted by size, then average frequency, both descending; equal clusters
/// keep their seed order.
pub fn greedy_clusters(
    table: &FrequencyTable,
    sets: &[BTreeSet<usize>],
    threshold: f64,
) -> Vec<KeywordCluster> {
    let entries = table.entries();
    let n = entries.len().min(sets.len());
    let mut assigned = vec![false; n];
    let mut clusters = Vec::new();

    for seed in 0..n {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];

        for other in 0..n {
            if assigned[other] {
                continue;
            }
            if jaccard(&sets[seed], &sets[other]) >= threshold {
                assigned[other] = true;
                members.push(other);
            }
        }

        if members.len() < 2 {
            continue;
        }

        let total: u32 = members.iter().map(|&i| entries[i].count).sum();
        clusters.push(KeywordCluster {
            keywords: members.iter().map(|&i| entries[i].keyword.clone()).collect(),
            size: members.len(),
            average_frequency: total as f64 / members.len() as f64,
        });
    }

    clusters.sort_by(|a, b| {
        b.size.cmp(&a.size).then(
            b.average_frequency
                .partial_cmp(&a.average_frequency)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    clusters
}

/// Cluster the top keywords of a batch.
///
/// An empty vocabulary gives an empty list.
pub fn cluster_keywords(
    extractor: &KeywordExtractor,
    records: &[Record],
    params: &ClusterParams,
) -> Result<Vec<KeywordCluster>> {
    params.validate()?;

    let keywords = extractor.extract_batch(records, params.min_length);
    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let table = FrequencyTable::from_keywords(&keywords, Some(params.max_keywords));
    let sets = presence_sets(records, &table.keywords(), params.presence);
    let clusters = greedy_clusters(&table, &sets, params.similarity_threshold);

    info!(
        vocabulary = table.len(),
        clusters = clusters.len(),
        threshold = params.similarity_threshold,
        "Clustered keywords"
    );

    Ok(clusters)
}
