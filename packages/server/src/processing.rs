//! Workbook-level processing: parse, fill metadata, serialize.

use seo_meta::{MetaGenerator, ProcessSummary, RowOutcome};
use tracing::info;

use crate::error::ProcessError;
use crate::workbook::{read_first_sheet, write_sheet, ColumnMap};

/// Suffix inserted before the extension of the output file name.
pub const OUTPUT_SUFFIX: &str = "_seo";

const XLSX_EXTENSION: &str = ".xlsx";

/// A processed workbook ready to be returned.
#[derive(Debug, Clone)]
pub struct ProcessedWorkbook {
    pub bytes: Vec<u8>,
    pub summary: ProcessSummary,
}

/// Whether a file name carries the .xlsx extension (case-insensitive).
pub fn is_xlsx(filename: &str) -> bool {
    filename
        .get(filename.len().saturating_sub(XLSX_EXTENSION.len())..)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION))
}

/// `urunler.xlsx` becomes `urunler_seo.xlsx`.
pub fn output_filename(input: &str) -> String {
    let stem = if is_xlsx(input) {
        &input[..input.len() - XLSX_EXTENSION.len()]
    } else {
        input
    };
    format!("{}{}{}", stem, OUTPUT_SUFFIX, XLSX_EXTENSION)
}

/// Fill SEO metadata into every eligible row of an xlsx workbook.
///
/// Nothing is processed unless the workbook parses and has all required
/// columns. Rows keep their order; untouched rows keep their cells exactly.
pub async fn process_workbook(
    bytes: &[u8],
    generator: &MetaGenerator,
) -> Result<ProcessedWorkbook, ProcessError> {
    let mut sheet = read_first_sheet(bytes).map_err(ProcessError::unreadable)?;
    let columns = ColumnMap::resolve(&mut sheet).map_err(ProcessError::MissingColumns)?;

    info!(
        sheet = %sheet.name,
        rows = sheet.rows.len(),
        details_column = columns.details.is_some(),
        enrichment = generator.enrichment_enabled(),
        "Processing workbook"
    );

    let mut summary = ProcessSummary::default();
    let mut rows: Vec<_> = (0..sheet.rows.len())
        .map(|index| columns.read_row(&sheet, index))
        .collect();

    for (index, row) in rows.iter_mut().enumerate() {
        let outcome = generator.process_row(row).await;
        if let RowOutcome::Generated(_) = outcome {
            columns.write_metadata(&mut sheet, index, row);
        }
        summary.record(outcome);
    }

    let bytes = write_sheet(&sheet).map_err(ProcessError::output)?;

    info!(
        generated = summary.generated(),
        enriched = summary.enriched,
        skipped_variants = summary.skipped_variants,
        skipped_filled = summary.skipped_filled,
        "Workbook processed"
    );

    Ok(ProcessedWorkbook { bytes, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_xlsx() {
        assert!(is_xlsx("urunler.xlsx"));
        assert!(is_xlsx("URUNLER.XLSX"));
        assert!(!is_xlsx("urunler.xls"));
        assert!(!is_xlsx("urunler.csv"));
        assert!(!is_xlsx("xlsx"));
        assert!(!is_xlsx(""));
        assert!(is_xlsx("ürünler.xlsx"));
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("urunler.xlsx"), "urunler_seo.xlsx");
        assert_eq!(output_filename("Katalog.XLSX"), "Katalog_seo.xlsx");
        assert_eq!(output_filename("katalog"), "katalog_seo.xlsx");
    }
}
