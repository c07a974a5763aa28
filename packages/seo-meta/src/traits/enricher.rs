//! Enricher trait for external metadata generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ProductFields;

/// Produces SEO metadata from an external text-generation service.
///
/// Implementations only fetch and parse; trimming and the quality gate are
/// applied by [`crate::MetaGenerator`] so every backend is held to the same
/// bar. Any `Err` sends the row down the rule-based path.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, request: &EnrichmentRequest) -> Result<EnrichmentPayload>;
}

/// Row data sent to the enricher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentRequest {
    pub brand: String,
    pub label: String,
    pub main_category: String,
    pub category: String,
    pub sub_category: String,

    /// Plain-text details (markup already stripped)
    pub details: String,
}

impl From<&ProductFields> for EnrichmentRequest {
    fn from(fields: &ProductFields) -> Self {
        Self {
            brand: fields.brand.clone(),
            label: fields.label.clone(),
            main_category: fields.main_category.clone(),
            category: fields.category.clone(),
            sub_category: fields.sub_category.clone(),
            details: fields.details.clone(),
        }
    }
}

/// Unverified metadata as returned by the service.
///
/// `keywords` is normally an array of strings but a scalar is tolerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentPayload {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: serde_json::Value,
}

impl EnrichmentPayload {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: serde_json::Value::Array(
                keywords
                    .into_iter()
                    .map(|k| serde_json::Value::String(k.into()))
                    .collect(),
            ),
        }
    }
}
