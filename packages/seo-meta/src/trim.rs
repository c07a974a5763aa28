//! Character-budget trimming that keeps whole words.

/// Characters stripped from the end of a trimmed string.
const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':', '-', ' '];

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 60;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 155;

/// Maximum joined keyword string length for enrichment output.
pub const KEYWORDS_MAX_CHARS: usize = 200;

/// Trim `text` to at most `max_chars` characters without splitting a word.
///
/// Lengths are counted in characters, not bytes. When the text is too long
/// it is cut at the last space inside the first `max_chars + 1` characters
/// (or hard-cut at `max_chars` if there is none) and trailing punctuation is
/// dropped. No ellipsis is appended.
pub fn trim_to_limit(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let window: Vec<char> = text.chars().take(max_chars + 1).collect();
    let cut = window
        .iter()
        .rposition(|&c| c == ' ')
        .unwrap_or(max_chars);

    let trimmed: String = window[..cut].iter().collect();
    trimmed.trim_end_matches(TRAILING_PUNCTUATION).to_string()
}
