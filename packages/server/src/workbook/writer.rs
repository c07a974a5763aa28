//! xlsx writing via rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook};

use super::{CellValue, Sheet, WorkbookError};

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Serialize a sheet into an xlsx workbook with a single worksheet.
///
/// Headers go to `sheet.header_row` and data rows directly below it. Blank
/// headers are left unwritten.
pub fn write_sheet(sheet: &Sheet) -> Result<Vec<u8>, WorkbookError> {
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if !sheet.name.is_empty() {
        worksheet.set_name(&sheet.name)?;
    }

    for (col, header) in sheet.headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        worksheet.write_string(sheet.header_row, col as u16, header)?;
    }

    for (index, row) in sheet.rows.iter().enumerate() {
        let row_num = sheet.header_row + index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                CellValue::DateTime(serial) => {
                    let format = if serial.fract() == 0.0 {
                        &date_format
                    } else {
                        &datetime_format
                    };
                    worksheet.write_number_with_format(row_num, col, *serial, format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::read_first_sheet;

    #[test]
    fn test_write_then_read_preserves_cells() {
        let mut sheet = Sheet::new("Ürünler", vec!["label".into(), "rootProductStockCode".into(), "aktif".into()]);
        sheet.rows.push(vec![
            CellValue::Text("Galaxy S21".into()),
            CellValue::Number(0.0),
            CellValue::Bool(true),
        ]);
        sheet.rows.push(vec![CellValue::Empty, CellValue::Number(42.0), CellValue::Empty]);

        let bytes = write_sheet(&sheet).unwrap();
        let read = read_first_sheet(&bytes).unwrap();

        assert_eq!(read.name, "Ürünler");
        assert_eq!(read.headers, sheet.headers);
        assert_eq!(read.cell(0, 0), &CellValue::Text("Galaxy S21".into()));
        assert_eq!(read.cell(0, 1), &CellValue::Number(0.0));
        assert_eq!(read.cell(0, 2), &CellValue::Bool(true));
        assert_eq!(read.cell(1, 0), &CellValue::Empty);
        assert_eq!(read.cell(1, 1), &CellValue::Number(42.0));
    }

    #[test]
    fn test_dates_stay_dates() {
        let mut sheet = Sheet::new("Sheet1", vec!["launchDate".into(), "updatedAt".into()]);
        sheet.rows.push(vec![CellValue::DateTime(44225.0), CellValue::DateTime(44225.5)]);

        let read = read_first_sheet(&write_sheet(&sheet).unwrap()).unwrap();

        assert_eq!(read.cell(0, 0), &CellValue::DateTime(44225.0));
        assert_eq!(read.cell(0, 1), &CellValue::DateTime(44225.5));
    }

    #[test]
    fn test_offset_sheet_keeps_positions() {
        let mut sheet = Sheet::new("Sheet1", vec![String::new(), "label".into(), "brand".into()]);
        sheet.header_row = 2;
        sheet.rows.push(vec![
            CellValue::Empty,
            CellValue::Text("Galaxy S21".into()),
            CellValue::Text("Samsung".into()),
        ]);

        let read = read_first_sheet(&write_sheet(&sheet).unwrap()).unwrap();

        assert_eq!(read.header_row, 2);
        assert_eq!(read.headers, sheet.headers);
        assert_eq!(read.column_index("label"), Some(1));
        assert_eq!(read.cell(0, 1), &CellValue::Text("Galaxy S21".into()));
    }
}
