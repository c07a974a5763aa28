//! SEO Metadata Generation for Product Catalogs
//!
//! Fills in title, description and keywords for root product rows that have
//! none, using deterministic rules over brand, label and category, with an
//! optional external-model enrichment path that falls back to the rules on
//! any failure.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seo_meta::{MetaGenerator, ProductRow};
//!
//! let generator = MetaGenerator::new();
//! let summary = generator.process_rows(&mut rows).await;
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - HTML details to plain text
//! - [`trim`] - Word-boundary-safe character budgets
//! - [`fields`] - Product type selection and joining
//! - [`generate`] - Title, description and keyword generators
//! - [`traits`] - The [`Enricher`] seam
//! - [`enrich`] - Enrichment post-processing and the OpenAI enricher
//! - [`pipeline`] - Row eligibility and processing
//! - [`testing`] - Mock implementations for testing

pub mod casing;
pub mod enrich;
pub mod error;
pub mod fields;
pub mod generate;
pub mod normalize;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod trim;
pub mod types;

pub use error::{EnrichmentError, Result};
pub use generate::{generate_description, generate_keywords, generate_rule_based, generate_title};
pub use normalize::clean_html;
pub use pipeline::{MetaGenerator, ProcessSummary, RowOutcome, SkipReason};
pub use traits::enricher::{Enricher, EnrichmentPayload, EnrichmentRequest};
pub use trim::{trim_to_limit, DESCRIPTION_MAX_CHARS, KEYWORDS_MAX_CHARS, TITLE_MAX_CHARS};
pub use types::{GenerationResult, GenerationSource, ProductFields, ProductRow};

#[cfg(feature = "openai")]
pub use enrich::OpenAIEnricher;

pub use testing::MockEnricher;
