use axum::{
    extract::{multipart::Field, Extension, Multipart},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::error::ProcessError;
use crate::processing::{is_xlsx, output_filename, process_workbook};
use crate::server::app::AppState;
use crate::server::templates::render_index;

/// Media type of the returned workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Form field carrying the workbook
const FILE_FIELD: &str = "file";

/// Upload endpoint
///
/// Accepts a multipart form with a `file` field holding an .xlsx workbook and
/// returns the processed workbook as an attachment. Validation failures
/// render the upload page with the reason instead of a bare error.
pub async fn upload_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ProcessError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;

    tracing::info!(filename = %filename, size = bytes.len(), "Workbook uploaded");

    let processed = process_workbook(&bytes, &state.generator).await?;
    let out_name = output_filename(&filename);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, content_disposition(&out_name)),
        ],
        processed.bytes,
    )
        .into_response())
}

/// Pull the file name and content of the `file` field.
///
/// The extension is checked before the body is read.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ProcessError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProcessError::Unreadable(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        return read_file_field(field).await;
    }

    Err(ProcessError::MissingFile)
}

async fn read_file_field(field: Field<'_>) -> Result<(String, Vec<u8>), ProcessError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    if !is_xlsx(&filename) {
        return Err(ProcessError::InvalidExtension);
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ProcessError::Unreadable(e.to_string()))?;

    Ok((filename, bytes.to_vec()))
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(filename: &str) -> HeaderValue {
    let ascii: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(filename)
    );

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProcessError::InvalidExtension
            | ProcessError::MissingFile
            | ProcessError::Unreadable(_) => StatusCode::BAD_REQUEST,
            ProcessError::MissingColumns(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProcessError::Output(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = %status, error = %self, "Upload rejected");

        (status, Html(render_index(Some(&self.to_string())))).into_response()
    }
}
