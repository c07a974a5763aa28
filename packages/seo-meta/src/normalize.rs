//! Markup stripping for free-text product details.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Convert a product details HTML fragment into plain prose.
///
/// Removes every tag, decodes character entities and collapses whitespace
/// runs (newlines and tabs included) into single spaces.
pub fn clean_html(raw_html: &str) -> String {
    if raw_html.is_empty() {
        return String::new();
    }

    let stripped = TAG_REGEX.replace_all(raw_html, "");
    let decoded = html_escape::decode_html_entities(&stripped);

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
