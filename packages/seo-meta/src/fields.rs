//! Field selection helpers shared by the generators and the enricher.

use lazy_static::lazy_static;
use regex::Regex;

use crate::casing;

lazy_static! {
    // Capacity / size attributes such as "128 gb", "750ml", "65 w".
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r"\b(\d{2,4}\s?(gb|ml|l|cm|mm|w))\b").unwrap();
}

/// Category labels shorter than this are treated as noise.
pub const MIN_PRODUCT_TYPE_CHARS: usize = 3;

/// Pick the product type from the category hierarchy.
///
/// Candidates are tried from most to least specific; the first one with at
/// least [`MIN_PRODUCT_TYPE_CHARS`] characters wins and is returned
/// lower-cased. Returns an empty string if none qualify.
pub fn pick_product_type(sub_category: &str, category: &str, main_category: &str) -> String {
    [sub_category, category, main_category]
        .into_iter()
        .map(str::trim)
        .find(|c| c.chars().count() >= MIN_PRODUCT_TYPE_CHARS)
        .map(casing::to_lower)
        .unwrap_or_default()
}

/// First non-blank category, most specific first. No length filter.
pub fn most_specific_category<'a>(
    sub_category: &'a str,
    category: &'a str,
    main_category: &'a str,
) -> &'a str {
    [sub_category, category, main_category]
        .into_iter()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or("")
}

/// Join the non-empty parts with single spaces.
pub fn smart_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find a numeric capacity attribute in a product label, lower-cased.
pub fn extract_attribute(label: &str) -> Option<String> {
    let lowered = casing::to_lower(label);
    ATTRIBUTE_REGEX
        .find(&lowered)
        .map(|m| m.as_str().to_string())
}
