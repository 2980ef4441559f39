//! Validation, template preview and generation handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::api::extractors::SessionContext;
use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, GenerateRequest, Template, TemplatePreview, TemplatePreviewRequest,
    ValidateRequest, ValidateResponse,
};
use crate::error::{AppError, Result};
use crate::service::GenerationResult;

/// Split phone input into valid and invalid numbers.
///
/// # Errors
///
/// Returns an error if the input cannot be resolved (bad range, too many numbers).
pub async fn validate(
    State(state): State<AppState>,
    _ctx: SessionContext,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ApiResponse<ValidateResponse>>> {
    let partition = state.generator_service.validate(&request.input)?;

    Ok(Json(ApiResponse::success(ValidateResponse {
        valid_count: partition.valid.len(),
        invalid_count: partition.invalid.len(),
        valid: partition.valid,
        invalid: partition.invalid,
    })))
}

/// Render a template against the example number and handle.
pub async fn preview_template(
    Json(request): Json<TemplatePreviewRequest>,
) -> Json<ApiResponse<TemplatePreview>> {
    let template = Template::parse(&request.template);
    Json(ApiResponse::success(TemplatePreview::from(&template)))
}

/// Run a generation cycle in the current session.
///
/// The pipeline runs on the blocking pool while it holds the session lock.
///
/// # Errors
///
/// Returns an error if there are no numbers or no handles, or a limit is exceeded.
pub async fn generate(
    State(state): State<AppState>,
    ctx: SessionContext,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ApiResponse<Arc<GenerationResult>>>> {
    let generator = Arc::clone(&state.generator_service);
    let session = Arc::clone(&ctx.session);

    let result = tokio::task::spawn_blocking(move || {
        let mut session = session.lock();
        generator.run(&request, &mut session)
    })
    .await
    .map_err(|e| AppError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(ApiResponse::success(result)))
}
