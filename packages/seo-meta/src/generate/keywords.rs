use crate::casing;
use crate::fields::{extract_attribute, pick_product_type};
use crate::types::ProductFields;

/// At most this many keyword phrases are emitted.
pub const MAX_KEYWORDS: usize = 3;

/// Build up to three comma-separated keyword phrases.
///
/// In rank order: brand + label, product type, capacity attribute from the
/// label. A phrase already covered (case-insensitive substring) by an earlier
/// one is skipped.
pub fn generate_keywords(fields: &ProductFields) -> String {
    let brand = fields.brand.trim();
    let label = fields.label.trim();

    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    match (brand.is_empty(), label.is_empty()) {
        (false, false) => keywords.push(format!("{} {}", brand, label)),
        (false, true) => keywords.push(brand.to_string()),
        (true, false) => keywords.push(label.to_string()),
        (true, true) => {}
    }

    let product_type = pick_product_type(&fields.sub_category, &fields.category, &fields.main_category);
    if !product_type.is_empty() && !casing::contains_folded(&keywords.join(" "), &product_type) {
        keywords.push(product_type);
    }

    if let Some(attribute) = extract_attribute(label) {
        if !keywords.iter().any(|k| casing::contains_folded(k, &attribute)) {
            keywords.push(attribute);
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords.join(", ")
}
