// Static lookup tables — category names, custom stopwords, defaults.
//
// These are read-only inputs to the analysis. Nothing here is mutated at
// runtime; `Config` only overrides the numeric defaults.

/// Default minimum keyword length (in characters).
pub const MIN_WORD_LENGTH: usize = 2;

/// Default number of keywords kept when ranking.
pub const MAX_KEYWORDS: usize = 50;

/// YouTube category id -> display name (Korean, as shown in the KR region).
pub const CATEGORY_MAPPING: &[(&str, &str)] = &[
    ("1", "영화 및 애니메이션"),
    ("2", "자동차"),
    ("10", "음악"),
    ("15", "애완동물"),
    ("17", "스포츠"),
    ("19", "여행 및 이벤트"),
    ("20", "게임"),
    ("22", "사람 및 블로그"),
    ("23", "코미디"),
    ("24", "엔터테인먼트"),
    ("25", "뉴스 및 정치"),
    ("26", "노하우 및 스타일"),
    ("27", "교육"),
    ("28", "과학 및 기술"),
];

/// Filler words and channel boilerplate that carry no topic signal in
/// Korean titles and descriptions.
pub const CUSTOM_STOPWORDS_KR: &[&str] = &[
    "그냥", "진짜", "정말", "너무", "완전", "엄청", "되게", "정말로",
    "그래서", "그런데", "그리고", "하지만", "그러나", "때문에", "그러면",
    "안녕하세요", "여러분", "구독", "좋아요", "댓글", "알림", "설정",
];

/// English platform boilerplate, added on top of the general stopword list.
pub const CUSTOM_STOPWORDS_EN: &[&str] = &[
    "video", "youtube", "subscribe", "like", "comment", "notification",
    "bell", "icon", "channel", "playlist", "watch", "viewers",
];

/// URL fragments that survive normalization when a link was malformed.
pub const WEB_BOILERPLATE: &[&str] = &["http", "https", "www", "com", "org", "net"];

/// Look up the display name for a category id.
///
/// Unknown ids render as `카테고리 <id>` rather than failing.
pub fn category_name(category_id: &str) -> String {
    CATEGORY_MAPPING
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("카테고리 {category_id}"))
}

/// Reverse lookup: display name -> category id.
pub fn category_id(name: &str) -> Option<&'static str> {
    CATEGORY_MAPPING
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_known() {
        assert_eq!(category_name("10"), "음악");
        assert_eq!(category_name("28"), "과학 및 기술");
    }

    #[test]
    fn test_category_name_unknown_falls_back() {
        assert_eq!(category_name("99"), "카테고리 99");
    }

    #[test]
    fn test_category_id_round_trip() {
        assert_eq!(category_id("게임"), Some("20"));
        assert_eq!(category_id("없는 카테고리"), None);
    }
}
