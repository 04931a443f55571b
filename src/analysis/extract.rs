// Per-record keyword extraction.
//
// Walks title, description and each tag of every record through the
// tokenizer and concatenates the results in scan order. That order is what
// frequency ties are broken by, so it must stay record-by-record,
// field-by-field.

use tracing::debug;

use crate::models::Record;
use crate::text::tokenizer::KeywordTokenizer;

/// Extracts keyword candidates from records.
#[derive(Default)]
pub struct KeywordExtractor {
    tokenizer: KeywordTokenizer,
}

impl KeywordExtractor {
    pub fn new(tokenizer: KeywordTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Keywords from one raw text field.
    pub fn extract_text(&self, text: &str, min_length: usize) -> Vec<String> {
        self.tokenizer.extract(text, min_length)
    }

    /// Keywords from one record: title, then description, then each tag.
    pub fn extract_record(&self, record: &Record, min_length: usize) -> Vec<String> {
        let mut keywords = self.extract_text(&record.title, min_length);
        keywords.extend(self.extract_text(&record.description, min_length));
        for tag in record.tag_list() {
            keywords.extend(self.extract_text(tag, min_length));
        }
        keywords
    }

    /// All keywords of a batch, concatenated in record order.
    pub fn extract_batch(&self, records: &[Record], min_length: usize) -> Vec<String> {
        let keywords: Vec<String> = records
            .iter()
            .flat_map(|r| self.extract_record(r, min_length))
            .collect();

        debug!(
            records = records.len(),
            keywords = keywords.len(),
            "Extracted keywords from batch"
        );

        keywords
    }
}
