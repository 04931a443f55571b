// Keyword tokenizer — turns one text field into keyword candidates.
//
// Two variants, picked per string by `script::classify`:
//   - Hangul text goes through a morphological analyzer with a POS filter,
//     or through a pattern tokenizer when no analyzer is plugged in.
//   - Everything else is split on word boundaries, lowercased and filtered.
//     Chunks holding Han or kana stay whole, since UAX #29 breaks them into
//     single characters that the length filter would then drop.
//
// Neither variant can fail. Analyzer errors are logged and the pattern
// tokenizer takes over for that string.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use super::morph::{is_content_tag, MorphAnalyzer};
use super::normalize::clean_text;
use super::script::{classify, Script};
use super::stopwords::Stopwords;
use crate::lexicon::WEB_BOILERPLATE;

static HANGUL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣a-zA-Z0-9]+").expect("valid Hangul run pattern"));

/// Backend for Hangul text, fixed when the tokenizer is built.
enum HangulBackend {
    Morphological(Box<dyn MorphAnalyzer>),
    Pattern,
}

/// Language-aware keyword tokenizer.
pub struct KeywordTokenizer {
    hangul: HangulBackend,
    stopwords: Stopwords,
}

impl Default for KeywordTokenizer {
    fn default() -> Self {
        Self::new(Stopwords::standard())
    }
}

impl KeywordTokenizer {
    /// Tokenizer with the pattern backend for Hangul and word-boundary
    /// splitting for everything else.
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            hangul: HangulBackend::Pattern,
            stopwords,
        }
    }

    /// Use a morphological analyzer for Hangul text.
    pub fn with_analyzer(mut self, analyzer: Box<dyn MorphAnalyzer>) -> Self {
        self.hangul = HangulBackend::Morphological(analyzer);
        self
    }

    /// Whether Hangul text is POS-filtered (as opposed to pattern-matched).
    pub fn has_analyzer(&self) -> bool {
        matches!(self.hangul, HangulBackend::Morphological(_))
    }

    /// Normalize a raw field, classify it and extract its keywords.
    pub fn extract(&self, raw: &str, min_length: usize) -> Vec<String> {
        let cleaned = clean_text(raw);
        match classify(&cleaned) {
            Script::Hangul => self.korean_keywords(&cleaned, min_length),
            Script::Other => self.english_keywords(&cleaned, min_length),
        }
    }

    /// Keywords from normalized Hangul text.
    pub fn korean_keywords(&self, text: &str, min_length: usize) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        match &self.hangul {
            HangulBackend::Morphological(analyzer) => match analyzer.segment(text) {
                Ok(morphemes) => morphemes
                    .into_iter()
                    .filter(|m| self.keep_morpheme(&m.surface, &m.tag, min_length))
                    .map(|m| m.surface)
                    .collect(),
                Err(e) => {
                    warn!(error = %e, "Morphological analysis failed, using pattern tokenizer");
                    self.korean_pattern_keywords(text, min_length)
                }
            },
            HangulBackend::Pattern => self.korean_pattern_keywords(text, min_length),
        }
    }

    fn keep_morpheme(&self, word: &str, tag: &str, min_length: usize) -> bool {
        let len = word.chars().count();
        len >= min_length
            && is_content_tag(tag)
            && !self.stopwords.is_korean_stopword(word)
            && !is_all_digits(word)
            && !(len > 1 && is_single_repeated(word))
            && !word
                .chars()
                .any(|c| !(c.is_alphanumeric() || c == '_' || c.is_whitespace()))
    }

    /// Pattern fallback: runs of Hangul syllables, ASCII letters and digits.
    /// No POS information, so only length, digit and stopword filters apply.
    fn korean_pattern_keywords(&self, text: &str, min_length: usize) -> Vec<String> {
        HANGUL_RUN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() >= min_length && !is_all_digits(word))
            .map(|word| {
                if word.chars().all(|c| c.is_ascii_alphabetic()) {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|word| !self.stopwords.is_korean_stopword(word))
            .collect()
    }

    /// Keywords from normalized non-Hangul text.
    pub fn english_keywords(&self, text: &str, min_length: usize) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lower = text.to_lowercase();
        split_words(&lower)
            .filter(|word| {
                let len = word.chars().count();
                len >= min_length
                    && len != 1
                    && word.chars().all(char::is_alphabetic)
                    && !self.stopwords.is_english_stopword(word)
                    && !(len > 2 && is_single_repeated(word))
                    && !WEB_BOILERPLATE.contains(word)
            })
            .map(str::to_string)
            .collect()
    }
}

/// Word-boundary split, except that whitespace chunks containing ideographs
/// or kana are kept as one word.
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().flat_map(|chunk| {
        if chunk.chars().any(is_ideographic) {
            vec![chunk]
        } else {
            chunk.unicode_words().collect()
        }
    })
}

fn is_ideographic(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // hiragana, katakana
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}')
}

fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

/// `ㅋㅋㅋ`, `aaaa`: one character repeated for the whole word.
fn is_single_repeated(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
