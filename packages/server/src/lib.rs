// SEO Metadata Generator - Server
//
// Upload an .xlsx product catalog, get it back with title/description/keywords
// filled for root products that had none. Generation lives in the seo-meta
// crate; this crate owns spreadsheet I/O and the HTTP surface.

pub mod config;
pub mod error;
pub mod processing;
pub mod server;
pub mod workbook;

pub use config::*;
pub use error::ProcessError;
pub use processing::{is_xlsx, output_filename, process_workbook, ProcessedWorkbook};
