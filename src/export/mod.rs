//! Export writers.
//!
//! Serializes an identifier list as plain text, CSV, an XLSX workbook, or a
//! JSON document.

pub mod delimited;
pub mod json;
pub mod spreadsheet;
pub mod text;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::split_identifier;
use crate::error::{AppError, ExportResult};

pub use json::JsonExport;

/// Column headers shared by the CSV and XLSX exports.
pub const COLUMNS: [&str; 3] = ["phone_number", "upi_handle", "full_vpa"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One identifier per line.
    Txt,
    /// Comma-separated values with a header row.
    Csv,
    /// Excel workbook.
    Xlsx,
    /// JSON document.
    Json,
}

impl ExportFormat {
    /// File extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }

    /// MIME type for the download.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Txt => "text/plain",
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Json => "application/json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            other => Err(AppError::BadRequest(format!("Unsupported export format: {other}"))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A rendered export ready for download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: &'static str,
    /// File content.
    pub bytes: Vec<u8>,
}

/// Download file name for an export made at `at`.
#[must_use]
pub fn file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!("upi_vpas_{}.{}", at.format("%Y%m%d_%H%M%S"), format.extension())
}

/// Split an identifier into CSV/XLSX columns.
///
/// Identifiers without `@` keep the whole string as the number and an empty handle.
#[must_use]
pub fn columns(identifier: &str) -> [&str; 3] {
    let (number, handle) = split_identifier(identifier).unwrap_or((identifier, ""));
    [number, handle, identifier]
}

/// Render `vpas` in the requested format.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn export(format: ExportFormat, vpas: &[String], at: DateTime<Utc>) -> ExportResult<ExportFile> {
    let bytes = match format {
        ExportFormat::Txt => text::to_text(vpas).into_bytes(),
        ExportFormat::Csv => delimited::to_csv(vpas)?,
        ExportFormat::Xlsx => spreadsheet::to_xlsx(vpas)?,
        ExportFormat::Json => JsonExport::new(vpas.to_vec(), at).to_vec_pretty()?,
    };

    Ok(ExportFile {
        file_name: file_name(format, at),
        content_type: format.content_type(),
        bytes,
    })
}
