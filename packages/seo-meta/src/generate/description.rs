use lazy_static::lazy_static;
use regex::Regex;

use crate::casing::{self, sentence_case};
use crate::fields::{most_specific_category, smart_join};
use crate::trim::{trim_to_limit, DESCRIPTION_MAX_CHARS};
use crate::types::ProductFields;

lazy_static! {
    static ref SENTENCE_END_REGEX: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// A details sentence at least this long is used instead of the template.
pub const DESCRIPTION_PREFER_DETAILS_CHARS: usize = 120;

const WITH_PRODUCT_TYPE_TAIL: &str = "Günlük kullanıma uygun, net ve pratik bir seçimdir.";
const WITHOUT_PRODUCT_TYPE_TAIL: &str = "ile ihtiyacınızı karşılayan pratik bir çözümdür.";

/// Build a description of at most 155 characters.
///
/// The first sentence of the product details wins when it is long enough to
/// stand on its own; otherwise a neutral one-sentence template is filled from
/// brand, label and category. With no brand, label or category at all, a
/// short details sentence is returned as is.
pub fn generate_description(fields: &ProductFields) -> String {
    let details_sentence = first_details_sentence(&fields.details);
    if let Some(sentence) = &details_sentence {
        if sentence.chars().count() >= DESCRIPTION_PREFER_DETAILS_CHARS {
            return sentence.clone();
        }
    }

    let product_type = casing::to_lower(most_specific_category(
        &fields.sub_category,
        &fields.category,
        &fields.main_category,
    ));

    let sentence = if product_type.is_empty() {
        let subject = smart_join([fields.brand.as_str(), fields.label.as_str()]);
        if subject.is_empty() {
            // Nothing to template from
            return details_sentence.unwrap_or_default();
        }
        format!("{} {}", sentence_case(&subject), WITHOUT_PRODUCT_TYPE_TAIL)
    } else {
        let subject = smart_join([
            fields.brand.as_str(),
            fields.label.as_str(),
            product_type.as_str(),
        ]);
        format!("{}. {}", sentence_case(&subject), WITH_PRODUCT_TYPE_TAIL)
    };

    trim_to_limit(&sentence, DESCRIPTION_MAX_CHARS)
}

/// First non-empty sentence of the details, capitalized and trimmed.
fn first_details_sentence(details: &str) -> Option<String> {
    if details.is_empty() {
        return None;
    }

    SENTENCE_END_REGEX
        .split(details)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(|s| trim_to_limit(&sentence_case(s), DESCRIPTION_MAX_CHARS))
}
