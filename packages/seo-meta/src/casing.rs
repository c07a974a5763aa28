//! Turkish-aware case mapping.
//!
//! The generated copy is Turkish, where dotted and dotless i are distinct
//! letters: `i` pairs with `İ` and `ı` pairs with `I`. The default Unicode
//! mappings get both wrong, so everything that lower-cases or capitalizes
//! goes through here.

/// Lower-case a string using Turkish rules.
pub fn to_lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

fn push_upper(out: &mut String, c: char) {
    match c {
        'i' => out.push('İ'),
        'ı' => out.push('I'),
        _ => out.extend(c.to_uppercase()),
    }
}

/// Capitalize the first character and leave the rest untouched.
///
/// Never upper-cases the whole string.
pub fn sentence_case(text: &str) -> String {
    let text = text.trim();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len() + 1);
            push_upper(&mut out, first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Case-insensitive substring test under Turkish folding.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    to_lower(haystack).contains(&to_lower(needle))
}
