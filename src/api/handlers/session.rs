//! Session lifecycle handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::extractors::SessionContext;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, SessionResponse};
use crate::error::Result;

/// Session overview.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    /// When the session was created (RFC 3339).
    pub created_at: String,
    /// Number of custom handles.
    pub custom_handles: usize,
    /// Number of history records.
    pub history_records: usize,
    /// Size of the last generation, if any.
    pub last_result_vpas: Option<usize>,
}

/// Create a new session.
///
/// # Errors
///
/// Returns an error if the session store is full.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SessionResponse>>> {
    let token = state.session_service.create()?;

    Ok(Json(ApiResponse::success(SessionResponse {
        token,
        token_type: "session".to_string(),
        expires_in: state.session_service.idle_timeout().as_secs(),
    })))
}

/// Describe the current session.
pub async fn get_session(ctx: SessionContext) -> Json<ApiResponse<SessionInfo>> {
    let info = {
        let session = ctx.session.lock();
        SessionInfo {
            created_at: session.created_at().to_rfc3339(),
            custom_handles: session.custom_handles.len(),
            history_records: session.history.len(),
            last_result_vpas: session.last_result.as_ref().map(|r| r.vpas.len()),
        }
    };

    Json(ApiResponse::success(info))
}

/// End the current session.
pub async fn end_session(
    State(state): State<AppState>,
    ctx: SessionContext,
) -> Json<ApiResponse<()>> {
    state.session_service.end(&ctx.token);
    Json(ApiResponse::ok())
}
