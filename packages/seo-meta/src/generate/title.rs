use crate::casing;
use crate::fields::{extract_attribute, pick_product_type, smart_join};
use crate::trim::{trim_to_limit, TITLE_MAX_CHARS};
use crate::types::ProductFields;

/// Titles shorter than this try to recover a capacity attribute from the label.
pub const TITLE_ATTRIBUTE_THRESHOLD_CHARS: usize = 48;

/// Build a title of at most 60 characters: `[brand] [label] [product type]`.
///
/// Short titles get a capacity attribute from the label (e.g. `128 gb`)
/// inserted before the product type when it is not already present.
pub fn generate_title(fields: &ProductFields) -> String {
    let product_type = pick_product_type(&fields.sub_category, &fields.category, &fields.main_category);
    let base = smart_join([fields.brand.as_str(), fields.label.as_str(), product_type.as_str()]);
    let title = trim_to_limit(&base, TITLE_MAX_CHARS);

    if title.chars().count() >= TITLE_ATTRIBUTE_THRESHOLD_CHARS || product_type.is_empty() {
        return title;
    }

    match extract_attribute(&fields.label) {
        Some(attribute) if !casing::contains_folded(&title, &attribute) => {
            let candidate = smart_join([
                fields.brand.as_str(),
                fields.label.as_str(),
                attribute.as_str(),
                product_type.as_str(),
            ]);
            trim_to_limit(&candidate, TITLE_MAX_CHARS)
        }
        _ => title,
    }
}
