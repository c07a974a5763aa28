// Common test utilities

#![allow(dead_code)]

use seo_server::workbook::{read_first_sheet, write_sheet, CellValue, Sheet};

/// Headers of a minimal valid catalog sheet.
pub const CATALOG_HEADERS: [&str; 4] = ["label", "brand", "mainCategory", "rootProductStockCode"];

pub fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

pub fn number(value: f64) -> CellValue {
    CellValue::Number(value)
}

/// Build xlsx bytes from headers and rows.
pub fn build_workbook(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Vec<u8> {
    let mut sheet = Sheet::new("Sheet1", headers.iter().map(|h| h.to_string()).collect());
    sheet.rows = rows;
    write_sheet(&sheet).expect("Failed to build test workbook")
}

/// A one-row catalog with a root Samsung Galaxy S21.
pub fn galaxy_workbook() -> Vec<u8> {
    build_workbook(
        &CATALOG_HEADERS,
        vec![vec![text("Galaxy S21"), text("Samsung"), text("Telefon"), number(0.0)]],
    )
}

/// Parse xlsx bytes back into a sheet.
pub fn read_workbook(bytes: &[u8]) -> Sheet {
    read_first_sheet(bytes).expect("Failed to read processed workbook")
}

/// Text of the cell under `header` in data row `row`.
pub fn cell_text(sheet: &Sheet, row: usize, header: &str) -> Option<String> {
    let col = sheet.column_index(header)?;
    sheet.cell(row, col).as_text()
}
