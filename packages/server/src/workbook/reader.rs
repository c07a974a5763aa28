//! xlsx reading via calamine.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use super::{CellValue, Sheet, WorkbookError};

/// Read the first worksheet. The first row of the used range is the header.
///
/// Cells keep their worksheet positions: the header row offset is recorded
/// and leading empty columns are padded back in.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Sheet, WorkbookError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| WorkbookError::Read(e.to_string()))?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(WorkbookError::NoWorksheet)?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| WorkbookError::Read(e.to_string()))?;

    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let pad = start_col as usize;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            std::iter::repeat_with(String::new)
                .take(pad)
                .chain(
                    header
                        .iter()
                        .map(|cell| cell_value(cell).as_text().unwrap_or_default()),
                )
                .collect()
        })
        .unwrap_or_default();

    let mut sheet = Sheet::new(name, headers);
    sheet.header_row = start_row;
    sheet.rows = rows
        .map(|row| {
            std::iter::repeat(CellValue::Empty)
                .take(pad)
                .chain(row.iter().map(cell_value))
                .collect()
        })
        .collect();

    Ok(sheet)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
    }
}
