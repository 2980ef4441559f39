//! Generation history handlers.

use axum::{Json, extract::Query};

use crate::api::extractors::SessionContext;
use crate::domain::{ApiResponse, HistoryQuery, HistoryResponse};

/// The most recent generation records, newest first.
pub async fn recent(
    ctx: SessionContext,
    Query(query): Query<HistoryQuery>,
) -> Json<ApiResponse<HistoryResponse>> {
    let response = {
        let session = ctx.session.lock();
        HistoryResponse {
            total: session.history.len(),
            records: session.history.recent(query.limit),
        }
    };

    Json(ApiResponse::success(response))
}

/// Drop every history record.
pub async fn clear(ctx: SessionContext) -> Json<ApiResponse<()>> {
    ctx.session.lock().history.clear();
    Json(ApiResponse::ok())
}
