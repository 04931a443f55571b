// Keyword co-occurrence network.
//
// The vocabulary is the top-N keywords of the batch. For every record we
// find which vocabulary keywords its title+description mention and count
// each unordered pair once per record. Pairs below the threshold are
// dropped; every vocabulary keyword becomes a node regardless.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::extract::KeywordExtractor;
use super::frequency::FrequencyTable;
use super::params::{NetworkParams, PresenceMatch};
use super::presence::present_indices;
use crate::models::Record;

/// Widest edge the renderer draws.
pub const MAX_EDGE_WIDTH: u32 = 10;

/// A vocabulary keyword with its batch-wide frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub keyword: String,
    pub frequency: u32,
}

/// An unordered keyword pair; `source < target` lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Number of records mentioning both keywords.
    pub weight: u32,
    /// Display width: `min(weight * 2, 10)`.
    pub width: u32,
}

/// Nodes and edges of the co-occurrence network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl KeywordGraph {
    /// Edges per keyword, as shown in the network summary.
    pub fn average_connections(&self) -> f64 {
        if self.nodes.is_empty() {
            0.0
        } else {
            self.edges.len() as f64 / self.nodes.len() as f64
        }
    }
}

/// Count how many records mention each unordered vocabulary pair.
///
/// Pairs come back keyed `(smaller, larger)` in the order they were first
/// seen, with counts of at least 1.
pub fn count_cooccurrences(
    records: &[Record],
    vocabulary: &[&str],
    mode: PresenceMatch,
) -> Vec<((String, String), u32)> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut pairs: Vec<((String, String), u32)> = Vec::new();

    for record in records {
        let text = record.combined_text();
        let present = present_indices(&text, vocabulary, mode);

        for (n, &i) in present.iter().enumerate() {
            for &j in &present[n + 1..] {
                let key = canonical_pair(vocabulary[i], vocabulary[j]);
                match index.get(&key) {
                    Some(&slot) => pairs[slot].1 += 1,
                    None => {
                        index.insert(key.clone(), pairs.len());
                        pairs.push((key, 1));
                    }
                }
            }
        }
    }

    pairs
}

fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Assemble the graph from a vocabulary table and raw pair counts.
pub fn assemble_graph(
    table: &FrequencyTable,
    pairs: Vec<((String, String), u32)>,
    min_cooccurrence: u32,
) -> KeywordGraph {
    let nodes = table
        .entries()
        .iter()
        .map(|e| GraphNode {
            keyword: e.keyword.clone(),
            frequency: e.count,
        })
        .collect();

    let edges = pairs
        .into_iter()
        .filter(|((a, b), count)| {
            *count >= min_cooccurrence && a != b && table.contains(a) && table.contains(b)
        })
        .map(|((source, target), weight)| GraphEdge {
            source,
            target,
            weight,
            width: weight.saturating_mul(2).min(MAX_EDGE_WIDTH),
        })
        .collect();

    KeywordGraph { nodes, edges }
}

/// Build the keyword co-occurrence network for a batch.
///
/// Returns `Ok(None)` when the batch yields no keywords at all; callers
/// show an empty state for that, not an error.
pub fn build_cooccurrence_graph(
    extractor: &KeywordExtractor,
    records: &[Record],
    params: &NetworkParams,
) -> Result<Option<(KeywordGraph, FrequencyTable)>> {
    params.validate()?;

    let keywords = extractor.extract_batch(records, params.min_length);
    if keywords.is_empty() {
        info!(records = records.len(), "No keywords found, skipping network");
        return Ok(None);
    }

    let table = FrequencyTable::from_keywords(&keywords, Some(params.max_keywords));
    let vocabulary = table.keywords();
    let pairs = count_cooccurrences(records, &vocabulary, params.presence);
    let graph = assemble_graph(&table, pairs, params.min_cooccurrence);

    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        min_cooccurrence = params.min_cooccurrence,
        "Built keyword co-occurrence network"
    );

    Ok(Some((graph, table)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str) -> Record {
        Record {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_are_canonical_and_accumulate() {
        let records = vec![record("music ai", ""), record("ai music", "")];
        // Vocabulary order deliberately not lexicographic.
        let pairs = count_cooccurrences(&records, &["music", "ai"], PresenceMatch::Substring);
        assert_eq!(pairs, vec![(("ai".to_string(), "music".to_string()), 2)]);
    }

    #[test]
    fn test_description_counts_tags_do_not() {
        let mut with_tags = record("ai", "");
        with_tags.tags = Some(crate::models::Tags::Joined("music".to_string()));
        let records = vec![record("ai", "music"), with_tags];
        let pairs = count_cooccurrences(&records, &["ai", "music"], PresenceMatch::Substring);
        assert_eq!(pairs[0].1, 1);
    }

    #[test]
    fn test_threshold_and_width() {
        let table = FrequencyTable::from_keywords(&["a", "b", "c", "a"], None);
        let pairs = vec![
            (("a".to_string(), "b".to_string()), 7),
            (("a".to_string(), "c".to_string()), 1),
            (("b".to_string(), "c".to_string()), 2),
        ];
        let graph = assemble_graph(&table, pairs, 2);

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0].width, 10);
        assert_eq!(graph.edges[1].width, 4);
        assert!(graph.edges.iter().all(|e| e.weight >= 2));
    }

    #[test]
    fn test_average_connections() {
        let empty = KeywordGraph::default();
        assert_eq!(empty.average_connections(), 0.0);

        let table = FrequencyTable::from_keywords(&["a", "b"], None);
        let graph = assemble_graph(&table, vec![(("a".to_string(), "b".to_string()), 1)], 1);
        assert_eq!(graph.average_connections(), 0.5);
    }
}
