// Script detection — decides which tokenizer a string goes through.

/// Share of Hangul syllables a string needs before it is treated as Korean.
pub const HANGUL_RATIO: f64 = 0.3;

/// The script family a normalized string is routed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Predominantly Hangul; goes through the morphological tokenizer.
    Hangul,
    /// Everything else; goes through the word-boundary tokenizer.
    Other,
}

/// Whether `c` is a complete Hangul syllable (`가`..=`힣`).
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Classify a normalized string.
///
/// Hangul when more than 30% of its characters are Hangul syllables. The
/// empty string is `Other`.
pub fn classify(text: &str) -> Script {
    let total = text.chars().count();
    if total == 0 {
        return Script::Other;
    }

    let hangul = text.chars().filter(|&c| is_hangul_syllable(c)).count();
    if hangul as f64 > total as f64 * HANGUL_RATIO {
        Script::Hangul
    } else {
        Script::Other
    }
}
