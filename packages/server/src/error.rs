//! Errors surfaced to the person uploading a file.
//!
//! Messages are shown verbatim on the upload page, so they are written for
//! end users (in Turkish, like the rest of the UI).

use thiserror::Error;

use crate::workbook::WorkbookError;

/// Failures that stop a workbook from being processed.
///
/// Enrichment failures are not here: they are absorbed by the generator.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Upload is not an .xlsx file
    #[error("Lütfen .xlsx formatında bir Excel dosyası yükleyin.")]
    InvalidExtension,

    /// No file was attached to the form
    #[error("Dosya okunamadı. Tekrar deneyin.")]
    MissingFile,

    /// Content could not be read as a workbook
    #[error("Dosya okunamadı: {0}")]
    Unreadable(String),

    /// Required columns absent
    #[error("Eksik sütun(lar): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Result workbook could not be serialized
    #[error("Çıktı oluşturulamadı: {0}")]
    Output(String),
}

impl ProcessError {
    pub(crate) fn unreadable(err: WorkbookError) -> Self {
        Self::Unreadable(err.to_string())
    }

    pub(crate) fn output(err: WorkbookError) -> Self {
        Self::Output(err.to_string())
    }
}
