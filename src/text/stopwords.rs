// Stopword sets for both tokenizer variants.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::lexicon::{CUSTOM_STOPWORDS_EN, CUSTOM_STOPWORDS_KR};

/// The two stopword sets the tokenizer consults.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    /// Lowercased English stopwords.
    pub english: HashSet<String>,
    /// Korean stopwords, compared as-is.
    pub korean: HashSet<String>,
}

impl Stopwords {
    /// The `stop-words` English list plus the custom platform lists.
    pub fn standard() -> Self {
        let mut stopwords = Self::custom_only();
        let english: Vec<String> = get(LANGUAGE::English);
        stopwords
            .english
            .extend(english.into_iter().map(|w| w.to_lowercase()));
        stopwords
    }

    /// Only the built-in custom lists from `lexicon`.
    pub fn custom_only() -> Self {
        Self {
            english: CUSTOM_STOPWORDS_EN.iter().map(|w| w.to_string()).collect(),
            korean: CUSTOM_STOPWORDS_KR.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add extra English words (lowercased).
    pub fn with_english<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.english
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Add extra Korean words.
    pub fn with_korean<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.korean
            .extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    pub fn is_english_stopword(&self, word: &str) -> bool {
        self.english.contains(word)
    }

    pub fn is_korean_stopword(&self, word: &str) -> bool {
        self.korean.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_includes_common_english() {
        let sw = Stopwords::standard();
        assert!(sw.is_english_stopword("the"));
        assert!(sw.is_english_stopword("subscribe"));
    }

    #[test]
    fn test_custom_only_has_platform_words() {
        let sw = Stopwords::custom_only();
        assert!(sw.is_english_stopword("youtube"));
        assert!(sw.is_korean_stopword("구독"));
        assert!(!sw.is_english_stopword("music"));
    }

    #[test]
    fn test_extension_lowercases_english() {
        let sw = Stopwords::custom_only().with_english(["Trailer"]).with_korean(["예고편"]);
        assert!(sw.is_english_stopword("trailer"));
        assert!(sw.is_korean_stopword("예고편"));
    }
}
