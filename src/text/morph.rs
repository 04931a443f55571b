// Morphological analyzer trait — swap-ready abstraction for Korean POS tagging.
//
// Korean keywords need a morpheme segmenter to separate stems from particles
// and endings. No analyzer ships with this crate; callers plug one in (a
// dictionary-backed tagger, a remote service, a test double). Without one the
// tokenizer uses the pattern-based fallback.

use anyhow::Result;

/// One morpheme with its Sejong-style part-of-speech tag (e.g. `NNG`, `JKS`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    pub tag: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

/// Trait for segmenting text into tagged morphemes.
pub trait MorphAnalyzer: Send + Sync {
    /// Segment a normalized string. Errors are treated as "analyzer
    /// unavailable" by the tokenizer, never surfaced to callers.
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>>;
}

/// Tags that never become keywords: particles, endings, suffixes, symbols,
/// copulas and adverbs. Checked before the keep-list, so a tag listed in both
/// is dropped.
pub const EXCLUDED_TAGS: &[&str] = &[
    "JKS", "JKC", "JKG", "JKO", "JKB", "JKV", "JKQ", "JX", "JC",
    "EP", "EF", "EC", "ETN", "ETM",
    "XSV", "XSA", "XR",
    "SF", "SP", "SS", "SE", "SO", "SW",
    "VCP", "VCN",
    "MAG", "MAJ",
];

/// Tags that carry meaning: nouns, verb/adjective stems, determiners,
/// numerals, foreign words, hanja and numbers.
pub const KEPT_TAGS: &[&str] = &[
    "NNG", "NNP", "NNB",
    "VV", "VA",
    "MM",
    "NR",
    "SL", "SH", "SN",
];

/// Whether a morpheme's tag makes it a keyword candidate.
pub fn is_content_tag(tag: &str) -> bool {
    !EXCLUDED_TAGS.contains(&tag) && KEPT_TAGS.contains(&tag)
}
