// Keyword presence — which records mention which vocabulary keywords.
//
// Presence is a text search over each record's lowercased title and
// description, not a re-tokenization. It is shared by the co-occurrence
// graph and the clusterer so both see the same matches.

use std::collections::BTreeSet;

use super::params::PresenceMatch;
use crate::models::Record;

/// Whether `keyword` occurs in `text` (both expected lowercased).
pub fn contains_keyword(text: &str, keyword: &str, mode: PresenceMatch) -> bool {
    match mode {
        PresenceMatch::Substring => text.contains(keyword),
        PresenceMatch::WordBoundary => text.match_indices(keyword).any(|(start, matched)| {
            let before = text[..start].chars().next_back();
            let after = text[start + matched.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        }),
    }
}

/// Indices into `vocabulary` of the keywords present in `text`, in
/// vocabulary order.
pub fn present_indices(text: &str, vocabulary: &[&str], mode: PresenceMatch) -> Vec<usize> {
    vocabulary
        .iter()
        .enumerate()
        .filter(|(_, kw)| contains_keyword(text, &kw.to_lowercase(), mode))
        .map(|(i, _)| i)
        .collect()
}

/// For each vocabulary keyword, the set of record indices whose combined
/// text contains it.
pub fn presence_sets(
    records: &[Record],
    vocabulary: &[&str],
    mode: PresenceMatch,
) -> Vec<BTreeSet<usize>> {
    let mut sets = vec![BTreeSet::new(); vocabulary.len()];
    for (record_idx, record) in records.iter().enumerate() {
        let text = record.combined_text();
        for kw_idx in present_indices(&text, vocabulary, mode) {
            sets[kw_idx].insert(record_idx);
        }
    }
    sets
}

/// Jaccard similarity of two presence sets; 0.0 when both are empty.
pub fn jaccard(a: &BTreeSet<usize>, b: &BTreeSet<usize>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Jaccard similarity between two keywords over a batch.
pub fn keyword_similarity(
    records: &[Record],
    keyword_a: &str,
    keyword_b: &str,
    mode: PresenceMatch,
) -> f64 {
    let sets = presence_sets(records, &[keyword_a, keyword_b], mode);
    jaccard(&sets[0], &sets[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> Record {
        Record {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_substring_over_matches() {
        assert!(contains_keyword("smart home", "art", PresenceMatch::Substring));
    }

    #[test]
    fn test_word_boundary_rejects_inner_match() {
        assert!(!contains_keyword("smart home", "art", PresenceMatch::WordBoundary));
        assert!(contains_keyword("smart art", "art", PresenceMatch::WordBoundary));
        assert!(contains_keyword("art", "art", PresenceMatch::WordBoundary));
        assert!(contains_keyword("k-pop art!", "art", PresenceMatch::WordBoundary));
    }

    #[test]
    fn test_present_indices_case_insensitive() {
        let vocab = ["music", "AI", "cooking"];
        assert_eq!(
            present_indices("ai music tools", &vocab, PresenceMatch::Substring),
            vec![0, 1]
        );
    }

    #[test]
    fn test_presence_sets() {
        let records = vec![record("AI music"), record("AI tools"), record("cooking")];
        let sets = presence_sets(&records, &["ai", "cooking"], PresenceMatch::Substring);
        assert_eq!(sets[0], BTreeSet::from([0, 1]));
        assert_eq!(sets[1], BTreeSet::from([2]));
    }

    #[test]
    fn test_jaccard_values() {
        let a = BTreeSet::from([0, 1]);
        let b = BTreeSet::from([1, 2]);
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_keyword_similarity() {
        let records = vec![record("AI music"), record("AI music tools"), record("cooking")];
        let sim = keyword_similarity(&records, "ai", "music", PresenceMatch::Substring);
        assert_eq!(sim, 1.0);
        let none = keyword_similarity(&records, "ai", "cooking", PresenceMatch::Substring);
        assert_eq!(none, 0.0);
    }
}
