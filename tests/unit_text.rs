// Unit tests for text cleaning, script detection and tokenization.
//
// Exercises the public text pipeline the way the analysis layer uses it:
// raw field in, keyword candidates out. A fake morphological analyzer stands
// in for a real Korean tagger.

use anyhow::Result;

use tubetrend::analysis::KeywordExtractor;
use tubetrend::models::{Record, Tags};
use tubetrend::text::morph::{MorphAnalyzer, Morpheme};
use tubetrend::text::normalize::clean_text;
use tubetrend::text::script::{classify, Script};
use tubetrend::text::stopwords::Stopwords;
use tubetrend::text::tokenizer::KeywordTokenizer;

fn tokenizer() -> KeywordTokenizer {
    KeywordTokenizer::new(Stopwords::custom_only())
}

struct NounTagger;

impl MorphAnalyzer for NounTagger {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>> {
        // Every whitespace token is a noun followed by a subject particle.
        Ok(text
            .split_whitespace()
            .flat_map(|w| [Morpheme::new(w, "NNG"), Morpheme::new("이", "JKS")])
            .collect())
    }
}

// ============================================================
// Normalization
// ============================================================

#[test]
fn clean_text_strips_markup_and_links() {
    let raw = "<p>New video!</p> https://youtu.be/abc?x=1 #shorts";
    assert_eq!(clean_text(raw), "New video shorts");
}

#[test]
fn clean_text_is_idempotent() {
    let once = clean_text("Hello,   <i>world</i> ~ 안녕!!");
    assert_eq!(clean_text(&once), once);
}

#[test]
fn clean_text_empty_and_symbol_only() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text("!!! ??? ..."), "");
}

// ============================================================
// Script detection
// ============================================================

#[test]
fn mostly_hangul_is_hangul() {
    assert_eq!(classify("오늘의 뉴스"), Script::Hangul);
}

#[test]
fn mostly_latin_is_other() {
    assert_eq!(classify("BTS new album 신곡"), Script::Other);
}

#[test]
fn empty_text_is_other() {
    assert_eq!(classify(""), Script::Other);
}

// ============================================================
// Tokenizer
// ============================================================

#[test]
fn english_keywords_are_lowercased_and_filtered() {
    let kw = tokenizer().extract("Subscribe for AI Music 2024 aaa!", 2);
    assert_eq!(kw, vec!["for", "ai", "music"]);
}

#[test]
fn english_min_length_applies() {
    let kw = tokenizer().extract("AI music generation", 3);
    assert_eq!(kw, vec!["music", "generation"]);
}

#[test]
fn korean_text_uses_pattern_fallback_without_analyzer() {
    let kw = tokenizer().extract("뉴진스 신곡 공개 구독", 2);
    assert_eq!(kw, vec!["뉴진스", "신곡", "공개"]);
}

#[test]
fn korean_text_uses_analyzer_when_present() {
    let tk = tokenizer().with_analyzer(Box::new(NounTagger));
    let kw = tk.extract("뉴진스 신곡", 2);
    assert_eq!(kw, vec!["뉴진스", "신곡"], "particles must be dropped");
}

#[test]
fn korean_analyzer_drops_symbols_and_short_nouns() {
    struct MixedTagger;

    impl MorphAnalyzer for MixedTagger {
        fn segment(&self, _text: &str) -> Result<Vec<Morpheme>> {
            Ok(vec![
                Morpheme::new("a+b", "SL"),
                Morpheme::new("집", "NNG"),
                Morpheme::new("캠핑", "NNG"),
            ])
        }
    }

    let tk = tokenizer().with_analyzer(Box::new(MixedTagger));
    assert_eq!(tk.extract("집 캠핑", 2), vec!["캠핑"]);
}

#[test]
fn ideographic_words_survive_tokenization() {
    assert_eq!(tokenizer().extract("東京 旅行 vlog!", 2), vec!["東京", "旅行", "vlog"]);
    assert_eq!(tokenizer().extract("美食 视频", 2), vec!["美食", "视频"]);
}

#[test]
fn standard_stopwords_drop_common_english() {
    let tk = KeywordTokenizer::new(Stopwords::standard());
    let kw = tk.extract("the music and the dance", 2);
    assert!(!kw.contains(&"the".to_string()));
    assert!(!kw.contains(&"and".to_string()));
    assert!(kw.contains(&"music".to_string()));
}

// ============================================================
// Tags: joined string vs sequence
// ============================================================

#[test]
fn joined_and_listed_tags_yield_same_candidates() {
    let extractor = KeywordExtractor::new(tokenizer());
    let joined = Record {
        tags: Some(Tags::Joined("k-pop, music, live".to_string())),
        ..Default::default()
    };
    let listed = Record {
        tags: Some(Tags::List(vec![
            "k-pop".to_string(),
            "music".to_string(),
            "live".to_string(),
        ])),
        ..Default::default()
    };

    let from_joined = extractor.extract_record(&joined, 2);
    let from_listed = extractor.extract_record(&listed, 2);
    assert_eq!(from_joined, from_listed);
    assert_eq!(from_joined, vec!["pop", "music", "live"]);
}

#[test]
fn tags_deserialize_from_string_or_array() {
    let a: Record = serde_json::from_str(r#"{"video_id": "v1", "title": "x", "tags": "a, b"}"#).unwrap();
    let b: Record = serde_json::from_str(r#"{"video_id": "v2", "title": "x", "tags": ["a", "b"]}"#).unwrap();
    assert_eq!(a.tag_list(), b.tag_list());

    let none: Record = serde_json::from_str(r#"{"video_id": "v3", "title": "x", "description": null}"#).unwrap();
    assert!(none.tag_list().is_empty());
}
