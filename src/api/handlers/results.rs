//! Result view handlers.

use axum::{Json, extract::Query};

use crate::api::extractors::SessionContext;
use crate::domain::{ApiResponse, ResultsQuery};
use crate::error::Result;
use crate::service::view::{self, ListView, TableView};

/// Table view of the last generation.
///
/// # Errors
///
/// Returns `NotFound` if nothing has been generated yet.
pub async fn table(
    ctx: SessionContext,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<ApiResponse<TableView>>> {
    let table = {
        let session = ctx.session.lock();
        view::table(&session.require_result()?.vpas, &query)
    };

    Ok(Json(ApiResponse::success(table)))
}

/// Plain list view of the last generation.
///
/// # Errors
///
/// Returns `NotFound` if nothing has been generated yet.
pub async fn list(
    ctx: SessionContext,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<ApiResponse<ListView>>> {
    let list = {
        let session = ctx.session.lock();
        view::list(&session.require_result()?.vpas, &query)
    };

    Ok(Json(ApiResponse::success(list)))
}
