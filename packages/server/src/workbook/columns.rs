//! Column resolution between a [`Sheet`] and [`ProductRow`]s.

use seo_meta::ProductRow;

use super::{CellValue, Sheet};

/// Columns every catalog sheet must have (exact, case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 4] = ["label", "brand", "mainCategory", "rootProductStockCode"];

/// Accepted names for the details column, in priority order.
pub const DETAILS_COLUMNS: [&str; 6] = [
    "details",
    "detail",
    "description",
    "aciklama",
    "urun_detayi",
    "urunDetayi",
];

/// Metadata columns, appended when absent.
pub const OUTPUT_COLUMNS: [&str; 3] = ["title", "description", "keywords"];

/// Required columns missing from `headers`, in canonical order.
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect()
}

/// Resolved column positions for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub label: usize,
    pub brand: usize,
    pub main_category: usize,
    pub root_product_stock_code: usize,
    pub category: Option<usize>,
    pub sub_category: Option<usize>,
    pub details: Option<usize>,
    pub title: usize,
    pub description: usize,
    pub keywords: usize,
}

impl ColumnMap {
    /// Validate required columns, then append any missing output columns.
    ///
    /// On error the sheet is left unchanged and the missing names are
    /// returned.
    pub fn resolve(sheet: &mut Sheet) -> Result<Self, Vec<String>> {
        let missing = missing_columns(&sheet.headers);
        if !missing.is_empty() {
            return Err(missing);
        }

        let required = |sheet: &Sheet, name: &str| sheet.column_index(name).unwrap_or_default();

        let label = required(sheet, "label");
        let brand = required(sheet, "brand");
        let main_category = required(sheet, "mainCategory");
        let root_product_stock_code = required(sheet, "rootProductStockCode");
        let category = sheet.column_index("category");
        let sub_category = sheet.column_index("subCategory");
        let details = DETAILS_COLUMNS
            .iter()
            .find_map(|name| sheet.column_index(name));

        let title = sheet.ensure_column("title");
        let description = sheet.ensure_column("description");
        let keywords = sheet.ensure_column("keywords");

        Ok(Self {
            label,
            brand,
            main_category,
            root_product_stock_code,
            category,
            sub_category,
            details,
            title,
            description,
            keywords,
        })
    }

    /// Read data row `index` as a product row.
    pub fn read_row(&self, sheet: &Sheet, index: usize) -> ProductRow {
        let text = |col: usize| sheet.cell(index, col).as_text();
        let optional_text = |col: Option<usize>| col.and_then(|c| sheet.cell(index, c).as_text());

        ProductRow {
            brand: text(self.brand),
            label: text(self.label),
            main_category: text(self.main_category),
            category: optional_text(self.category),
            sub_category: optional_text(self.sub_category),
            root_product_stock_code: sheet.cell(index, self.root_product_stock_code).as_number(),
            details_html: optional_text(self.details),
            title: text(self.title),
            description: text(self.description),
            keywords: text(self.keywords),
        }
    }

    /// Write the metadata fields of `row` into data row `index`.
    pub fn write_metadata(&self, sheet: &mut Sheet, index: usize, row: &ProductRow) {
        let cells = [
            (self.title, &row.title),
            (self.description, &row.description),
            (self.keywords, &row.keywords),
        ];
        for (col, value) in cells {
            let cell = match value.as_deref() {
                Some(v) if !v.is_empty() => CellValue::Text(v.to_string()),
                _ => CellValue::Empty,
            };
            sheet.set_cell(index, col, cell);
        }
    }
}
