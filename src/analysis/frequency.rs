// Keyword frequency ranking.
//
// Counts every extracted keyword across a batch and orders them by count,
// highest first. Ties keep the order in which the keywords were first seen,
// which makes the ranking stable across runs and independent of hash order.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::extract::KeywordExtractor;
use super::params::{validate_max_keywords, validate_min_length};
use crate::models::Record;

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
}

/// Keywords with their counts, in descending count order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<KeywordCount>,
}

impl FrequencyTable {
    /// Count a keyword sequence and keep the top `max_keywords` (all when
    /// `None`).
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S], max_keywords: Option<usize>) -> Self {
        // keyword -> (count, position of first occurrence)
        let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
        for (pos, keyword) in keywords.iter().enumerate() {
            counts
                .entry(keyword.as_ref())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, pos));
        }

        let mut ranked: Vec<(&str, u32, usize)> = counts
            .into_iter()
            .map(|(kw, (count, first))| (kw, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        if let Some(max) = max_keywords {
            ranked.truncate(max);
        }

        Self {
            entries: ranked
                .into_iter()
                .map(|(keyword, count, _)| KeywordCount {
                    keyword: keyword.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a keyword, if it is in the table.
    pub fn get(&self, keyword: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.count)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    /// Keywords in rank order.
    pub fn keywords(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.keyword.as_str()).collect()
    }

    /// Highest count in the table (0 when empty).
    pub fn max_count(&self) -> u32 {
        self.entries.first().map(|e| e.count).unwrap_or(0)
    }
}

/// Rank the keywords of a batch.
///
/// Empty batches, or batches where nothing survives the filters, give an
/// empty table.
pub fn rank_keywords(
    extractor: &KeywordExtractor,
    records: &[Record],
    min_length: usize,
    max_keywords: Option<usize>,
) -> Result<FrequencyTable> {
    validate_min_length(min_length)?;
    if let Some(max) = max_keywords {
        validate_max_keywords(max)?;
    }

    let keywords = extractor.extract_batch(records, min_length);
    let table = FrequencyTable::from_keywords(&keywords, max_keywords);

    info!(
        records = records.len(),
        distinct = table.len(),
        top_keyword = table.entries().first().map(|e| e.keyword.as_str()).unwrap_or(""),
        "Ranked keywords"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_orders_descending() {
        let table = FrequencyTable::from_keywords(&["b", "a", "b", "c", "b", "a"], None);
        assert_eq!(table.keywords(), vec!["b", "a", "c"]);
        assert_eq!(table.get("b"), Some(3));
        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.max_count(), 3);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let table = FrequencyTable::from_keywords(&["x", "y", "z", "z", "y", "x"], None);
        assert_eq!(table.keywords(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_truncation() {
        let table = FrequencyTable::from_keywords(&["a", "b", "c", "a"], Some(2));
        assert_eq!(table.keywords(), vec!["a", "b"]);

        let all = FrequencyTable::from_keywords(&["a", "b"], Some(10));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        let table = FrequencyTable::from_keywords(&empty, Some(5));
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert!(!table.contains("a"));
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let table = FrequencyTable::from_keywords(&["a", "b", "a"], None);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"keyword":"a","count":2},{"keyword":"b","count":1}]"#
        );
    }
}
