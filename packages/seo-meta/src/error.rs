//! Typed errors for the metadata generator.
//!
//! Enrichment errors never escape [`crate::MetaGenerator`]; they are logged
//! and the rule-based generators take over. The type is public so custom
//! [`crate::Enricher`] implementations can report failures.

use thiserror::Error;

/// Errors from the optional enrichment path.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// Connection failed or was reset
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response or an empty completion
    #[error("API error: {0}")]
    Api(String),

    /// Completion was not the expected JSON object
    #[error("parse error: {0}")]
    Parse(String),

    /// Payload parsed but fell below the minimum quality bar
    #[error("quality gate rejected {field}: {reason}")]
    QualityGate { field: &'static str, reason: String },
}

impl From<serde_json::Error> for EnrichmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for enrichment operations.
pub type Result<T> = std::result::Result<T, EnrichmentError>;
