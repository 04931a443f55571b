// Output formatting — terminal display helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..60]`), this respects UTF-8 character
/// boundaries and never panics on Hangul or emoji.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Compact count formatting: 1.2M, 3.4K, or thousands-separated below 1,000.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        group_thousands(n)
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One page of `items` (1-based `page`), plus the total page count.
///
/// Out-of-range pages are clamped to the last page; an empty slice is a
/// single empty page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    (&items[start.min(end)..end], total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("안녕하세요 여러분", 5), "안녕하세요...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1_234_567), "1.2M");
        assert_eq!(format_number(3_400), "3.4K");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1_234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(12), "12");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();
        let (page, total) = paginate(&items, 1, 10);
        assert_eq!(total, 3);
        assert_eq!(page, &items[0..10]);

        let (last, _) = paginate(&items, 3, 10);
        assert_eq!(last, &[21, 22, 23, 24, 25]);

        let (clamped, _) = paginate(&items, 99, 10);
        assert_eq!(clamped, last);

        let empty: Vec<u32> = Vec::new();
        let (none, total) = paginate(&empty, 1, 10);
        assert!(none.is_empty());
        assert_eq!(total, 1);
    }
}
