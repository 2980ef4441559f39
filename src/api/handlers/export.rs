//! Export download handler.

use axum::{
    extract::Path,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use chrono::Utc;
use metrics::counter;
use tracing::info;

use crate::api::extractors::SessionContext;
use crate::error::Result;
use crate::export::{self, ExportFormat};

/// Download the last generation in the requested format.
///
/// # Errors
///
/// Returns an error if the format is unknown, nothing has been generated, or
/// the writer fails.
pub async fn download(
    ctx: SessionContext,
    Path(format): Path<String>,
) -> Result<impl IntoResponse> {
    let format: ExportFormat = format.parse()?;

    let file = {
        let session = ctx.session.lock();
        let result = session.require_result()?;
        export::export(format, &result.vpas, Utc::now())?
    };

    counter!("vpagen_exports_total", "format" => format.extension()).increment(1);
    info!(
        format = %format,
        file_name = %file.file_name,
        bytes = file.bytes.len(),
        "Export rendered"
    );

    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    Ok((
        [(CONTENT_TYPE, file.content_type.to_string()), (CONTENT_DISPOSITION, disposition)],
        file.bytes,
    ))
}
