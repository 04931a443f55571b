// TF-IDF keyword scoring.
//
// Complements raw frequency: each text is first reduced to its keywords by
// our own tokenizer (so Korean handling and stopwords match the rest of the
// analysis), then the keyword documents are scored with the
// `keyword_extraction` crate. Words frequent in a few videos rank above
// words spread thinly across all of them.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use tracing::{debug, info};

use super::extract::KeywordExtractor;

/// Top `max_features` keywords by TF-IDF score, highest first.
///
/// Returns an empty list when no text yields any keyword.
pub fn tfidf_scores(
    extractor: &KeywordExtractor,
    texts: &[String],
    min_length: usize,
    max_features: usize,
) -> Vec<(String, f32)> {
    let documents: Vec<String> = texts
        .iter()
        .map(|text| extractor.extract_text(text, min_length).join(" "))
        .collect();

    if documents.iter().all(|d| d.is_empty()) {
        debug!(texts = texts.len(), "No keywords for TF-IDF");
        return Vec::new();
    }

    // Stopwords were already removed during extraction.
    let no_stop_words: Vec<String> = Vec::new();
    let params = TfIdfParams::UnprocessedDocuments(&documents, &no_stop_words, None);
    let tfidf = TfIdf::new(params);
    let ranked = tfidf.get_ranked_word_scores(max_features);

    info!(
        documents = documents.len(),
        keywords = ranked.len(),
        "Computed TF-IDF scores"
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::stopwords::Stopwords;
    use crate::text::tokenizer::KeywordTokenizer;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(KeywordTokenizer::new(Stopwords::custom_only()))
    }

    #[test]
    fn test_empty_input() {
        assert!(tfidf_scores(&extractor(), &[], 2, 10).is_empty());
    }

    #[test]
    fn test_texts_without_keywords() {
        let texts = vec!["!!!".to_string(), "".to_string()];
        assert!(tfidf_scores(&extractor(), &texts, 2, 10).is_empty());
    }

    #[test]
    fn test_scores_are_ranked_and_bounded() {
        let texts = vec![
            "guitar lesson for beginners".to_string(),
            "guitar chords and guitar riffs".to_string(),
            "baking bread at home".to_string(),
        ];
        let scores = tfidf_scores(&extractor(), &texts, 2, 3);
        assert!(!scores.is_empty());
        assert!(scores.len() <= 3);
        for pair in scores.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "scores should be descending");
        }
    }
}
