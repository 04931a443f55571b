// Text normalization — strip markup, links and punctuation.
//
// Titles and descriptions arrive with HTML fragments, links and emoji.
// Keyword extraction only wants letters, digits and single spaces.

use std::sync::LazyLock;

use regex_lite::Regex;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid HTML tag pattern"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*(),]|%[0-9a-fA-F]{2})+")
        .expect("valid URL pattern")
});

/// Clean a raw text field.
///
/// Steps, in order: drop `<...>` tags, drop `http(s)://` links, replace every
/// character that is not a letter, digit or whitespace with a space, then
/// collapse whitespace runs and trim. Never fails; the worst case is an
/// empty string.
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let without_tags = HTML_TAG.replace_all(raw, "");
    let without_urls = URL.replace_all(&without_tags, "");

    let letters_only: String = without_urls
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    letters_only.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_tags() {
        assert_eq!(clean_text("<b>Hello</b> world"), "Hello world");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            clean_text("watch https://youtu.be/abc123?t=10 now"),
            "watch now"
        );
        assert_eq!(clean_text("http://example.com"), "");
    }

    #[test]
    fn test_replaces_punctuation_with_space() {
        assert_eq!(clean_text("k-pop!!! #live"), "k pop live");
    }

    #[test]
    fn test_keeps_hangul_and_digits() {
        assert_eq!(clean_text("🔥 뉴진스 2024 신곡!"), "뉴진스 2024 신곡");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  a \t\n  b  "), "a b");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("!!! ???"), "");
    }
}
