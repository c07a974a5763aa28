//! Row processing: eligibility, enrichment with fallback, and write-back.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::enrich::finalize_payload;
use crate::generate::generate_rule_based;
use crate::traits::enricher::{Enricher, EnrichmentRequest};
use crate::types::{GenerationResult, GenerationSource, ProductFields, ProductRow};

/// Generates SEO metadata for product rows.
///
/// Enrichment is on when an [`Enricher`] is attached. The choice is made
/// once at construction time and never changes for the generator's lifetime.
#[derive(Clone, Default)]
pub struct MetaGenerator {
    enricher: Option<Arc<dyn Enricher>>,
}

/// Why a row was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Stock code missing or not zero
    Variant,
    /// Title, description or keywords already present
    AlreadyFilled,
}

/// Outcome of processing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Generated(GenerationSource),
    Skipped(SkipReason),
}

/// Per-file counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub total_rows: usize,
    pub enriched: usize,
    pub rule_based: usize,
    pub skipped_variants: usize,
    pub skipped_filled: usize,
}

impl ProcessSummary {
    /// Count one row outcome.
    pub fn record(&mut self, outcome: RowOutcome) {
        self.total_rows += 1;
        match outcome {
            RowOutcome::Generated(GenerationSource::Enrichment) => self.enriched += 1,
            RowOutcome::Generated(GenerationSource::Rules) => self.rule_based += 1,
            RowOutcome::Skipped(SkipReason::Variant) => self.skipped_variants += 1,
            RowOutcome::Skipped(SkipReason::AlreadyFilled) => self.skipped_filled += 1,
        }
    }

    /// Rows that received new metadata.
    pub fn generated(&self) -> usize {
        self.enriched + self.rule_based
    }
}

impl MetaGenerator {
    /// Rule-based generator with enrichment off.
    pub fn new() -> Self {
        Self { enricher: None }
    }

    /// Attach an enricher; it is tried before the rule-based generators.
    pub fn with_enricher(mut self, enricher: Arc<dyn Enricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    pub fn enrichment_enabled(&self) -> bool {
        self.enricher.is_some()
    }

    /// Generate metadata for one product.
    ///
    /// Tries the enricher first; any failure or a result below the quality
    /// bar is discarded whole and the rule-based generators run instead.
    pub async fn generate(&self, fields: &ProductFields) -> GenerationResult {
        if let Some(result) = self.try_enrich(fields).await {
            return result;
        }
        generate_rule_based(fields)
    }

    async fn try_enrich(&self, fields: &ProductFields) -> Option<GenerationResult> {
        let enricher = self.enricher.as_ref()?;
        let request = EnrichmentRequest::from(fields);

        let outcome = match enricher.enrich(&request).await {
            Ok(payload) => finalize_payload(payload),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(
                    error = %e,
                    brand = %fields.brand,
                    label = %fields.label,
                    "Enrichment unusable, falling back to rule-based generation"
                );
                None
            }
        }
    }

    /// Process one row in place.
    ///
    /// Only root products with no metadata at all are filled; everything
    /// else is left exactly as it was.
    pub async fn process_row(&self, row: &mut ProductRow) -> RowOutcome {
        if !row.is_root_product() {
            return RowOutcome::Skipped(SkipReason::Variant);
        }
        if row.has_metadata() {
            return RowOutcome::Skipped(SkipReason::AlreadyFilled);
        }

        let result = self.generate(&row.fields()).await;
        debug!(
            label = row.label.as_deref().unwrap_or_default(),
            source = ?result.source,
            title = %result.title,
            "Generated metadata"
        );
        row.apply(&result);

        RowOutcome::Generated(result.source)
    }

    /// Process rows sequentially, in order.
    pub async fn process_rows(&self, rows: &mut [ProductRow]) -> ProcessSummary {
        let mut summary = ProcessSummary::default();
        for row in rows.iter_mut() {
            let outcome = self.process_row(row).await;
            summary.record(outcome);
        }

        info!(
            total = summary.total_rows,
            enriched = summary.enriched,
            rule_based = summary.rule_based,
            skipped_variants = summary.skipped_variants,
            skipped_filled = summary.skipped_filled,
            "Processed product rows"
        );

        summary
    }
}
