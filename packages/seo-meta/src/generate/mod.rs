//! Rule-based metadata generators.
//!
//! Each generator is a pure function of [`ProductFields`]. Together they are
//! the fallback that always produces a result when enrichment is off or
//! unusable.

mod description;
mod keywords;
mod title;

pub use description::{generate_description, DESCRIPTION_PREFER_DETAILS_CHARS};
pub use keywords::{generate_keywords, MAX_KEYWORDS};
pub use title::{generate_title, TITLE_ATTRIBUTE_THRESHOLD_CHARS};

use crate::types::{GenerationResult, GenerationSource, ProductFields};

/// Run all three rule-based generators.
pub fn generate_rule_based(fields: &ProductFields) -> GenerationResult {
    GenerationResult {
        title: generate_title(fields),
        description: generate_description(fields),
        keywords: generate_keywords(fields),
        source: GenerationSource::Rules,
    }
}
