//! Spreadsheet model and xlsx I/O.
//!
//! A [`Sheet`] is the first worksheet of a workbook: a header row plus data
//! rows of [`CellValue`]s. Columns are looked up by exact header name.
//! Column indices are absolute worksheet columns, so leading empty columns
//! are kept as blank headers.

pub mod columns;
pub mod reader;
pub mod writer;

pub use columns::{ColumnMap, DETAILS_COLUMNS, OUTPUT_COLUMNS, REQUIRED_COLUMNS};
pub use reader::read_first_sheet;
pub use writer::write_sheet;

use thiserror::Error;

/// Workbook I/O errors.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Content could not be parsed as an xlsx workbook
    #[error("{0}")]
    Read(String),

    /// Workbook has no worksheets
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// Serialization failed
    #[error("{0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel date serial (days since 1899-12-30, time as the fraction)
    DateTime(f64),
}

impl CellValue {
    /// Cell rendered as text; `None` for empty cells.
    ///
    /// Whole numbers render without a fractional part.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) | CellValue::DateTime(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }

    /// Numeric value of a number cell, or of a text cell that parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Empty | CellValue::Bool(_) | CellValue::DateTime(_) => None,
        }
    }
}

/// First worksheet of a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,

    /// Zero-based worksheet row holding the headers
    pub header_row: u32,

    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header_row: 0,
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of the first column with exactly this header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of `name`, appending an empty column at the end if absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: CellValue) {
        let width = self.headers.len().max(col + 1);
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() < width {
                cells.resize(width, CellValue::Empty);
            }
            cells[col] = value;
        }
    }
}
