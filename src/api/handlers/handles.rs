//! Handle catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::extractors::SessionContext;
use crate::api::state::AppState;
use crate::domain::{
    AddHandleRequest, ApiResponse, BulkHandlesRequest, BulkHandlesResponse, CatalogResponse,
    CategoryResponse, DEFAULT_HANDLES, HandleCategory, HandleListResponse, HandleSelection,
};
use crate::error::Result;

/// Built-in handles and category presets.
pub async fn catalog() -> Json<ApiResponse<CatalogResponse>> {
    let categories = HandleCategory::ALL
        .into_iter()
        .map(|category| CategoryResponse {
            id: category,
            label: category.label(),
            handles: category.handles(),
        })
        .collect();

    Json(ApiResponse::success(CatalogResponse {
        handles: DEFAULT_HANDLES.to_vec(),
        categories,
    }))
}

/// List the session's custom handles.
pub async fn list_custom(ctx: SessionContext) -> Json<ApiResponse<HandleListResponse>> {
    let handles = ctx.session.lock().custom_handles.as_slice().to_vec();
    Json(ApiResponse::success(HandleListResponse::new(handles)))
}

/// Add one custom handle.
///
/// # Errors
///
/// Returns an error if the handle is blank or already known.
pub async fn add_custom(
    ctx: SessionContext,
    Json(request): Json<AddHandleRequest>,
) -> Result<Json<ApiResponse<HandleListResponse>>> {
    let handles = {
        let mut session = ctx.session.lock();
        let added = session.custom_handles.add(&request.handle)?;
        debug!(handle = %added, "Custom handle added");
        session.custom_handles.as_slice().to_vec()
    };

    Ok(Json(ApiResponse::success(HandleListResponse::new(handles))))
}

/// Add custom handles, one per line.
pub async fn add_bulk(
    ctx: SessionContext,
    Json(request): Json<BulkHandlesRequest>,
) -> Json<ApiResponse<BulkHandlesResponse>> {
    let response = {
        let mut session = ctx.session.lock();
        let added = session.custom_handles.add_bulk(&request.text);
        debug!(added, "Custom handles added in bulk");
        BulkHandlesResponse {
            added,
            handles: session.custom_handles.as_slice().to_vec(),
        }
    };

    Json(ApiResponse::success(response))
}

/// Remove the custom handle at `index`.
///
/// # Errors
///
/// Returns an error if the index is out of range.
pub async fn remove_custom(
    ctx: SessionContext,
    Path(index): Path<usize>,
) -> Result<Json<ApiResponse<HandleListResponse>>> {
    let handles = {
        let mut session = ctx.session.lock();
        let removed = session.custom_handles.remove(index)?;
        debug!(handle = %removed, "Custom handle removed");
        session.custom_handles.as_slice().to_vec()
    };

    Ok(Json(ApiResponse::success(HandleListResponse::new(handles))))
}

/// Remove every custom handle.
pub async fn clear_custom(ctx: SessionContext) -> Json<ApiResponse<()>> {
    ctx.session.lock().custom_handles.clear();
    Json(ApiResponse::ok())
}

/// Resolve a selection to the handles a generation would use.
///
/// # Errors
///
/// Returns an error if the selection exceeds the handle limit.
pub async fn preview_selection(
    State(state): State<AppState>,
    ctx: SessionContext,
    Json(selection): Json<HandleSelection>,
) -> Result<Json<ApiResponse<HandleListResponse>>> {
    let handles = {
        let session = ctx.session.lock();
        state
            .generator_service
            .select_handles(&selection, &session.custom_handles)?
    };

    Ok(Json(ApiResponse::success(HandleListResponse::new(handles))))
}
