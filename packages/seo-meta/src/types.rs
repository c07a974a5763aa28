//! Row and result types.

use crate::normalize::clean_html;

/// A product row as read from the catalog sheet.
///
/// Absent cells are `None`. The three metadata fields are the outputs;
/// everything else is input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRow {
    pub brand: Option<String>,
    pub label: Option<String>,
    pub main_category: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,

    /// `0` marks a root product; any other value marks a variant.
    pub root_product_stock_code: Option<f64>,

    /// Raw details markup
    pub details_html: Option<String>,

    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

impl ProductRow {
    /// Whether this row is a root (main) product.
    pub fn is_root_product(&self) -> bool {
        self.root_product_stock_code == Some(0.0)
    }

    /// Whether any of title, description or keywords is already filled.
    ///
    /// The three are treated as a unit: one filled field means the row
    /// already has metadata.
    pub fn has_metadata(&self) -> bool {
        [&self.title, &self.description, &self.keywords]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// Generator inputs for this row, with details already cleaned.
    pub fn fields(&self) -> ProductFields {
        fn text(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        ProductFields {
            brand: text(&self.brand),
            label: text(&self.label),
            main_category: text(&self.main_category),
            category: text(&self.category),
            sub_category: text(&self.sub_category),
            details: self
                .details_html
                .as_deref()
                .map(clean_html)
                .unwrap_or_default(),
        }
    }

    /// Write a generation result into the metadata fields.
    pub fn apply(&mut self, result: &GenerationResult) {
        self.title = Some(result.title.clone());
        self.description = Some(result.description.clone());
        self.keywords = Some(result.keywords.clone());
    }
}

/// Generator inputs. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub brand: String,
    pub label: String,
    pub main_category: String,
    pub category: String,
    pub sub_category: String,

    /// Plain-text details (markup already stripped)
    pub details: String,
}

impl ProductFields {
    pub fn new(brand: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_main_category(mut self, main_category: impl Into<String>) -> Self {
        self.main_category = main_category.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

/// Which path produced a [`GenerationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    /// External text-generation service
    Enrichment,
    /// Deterministic rule-based generators
    Rules,
}

/// Generated SEO metadata for one row.
///
/// All three fields always come from the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub source: GenerationSource,
}
