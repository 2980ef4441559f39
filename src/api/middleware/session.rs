//! Session middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::extractors::SessionContext;
use crate::api::state::AppState;
use crate::error::AppError;

/// Extract bearer token from Authorization header.
fn extract_bearer_token(req: &Request<Body>) -> Option<String> {
    let auth_header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
        .map(ToString::to_string)
}

/// Middleware that resolves the bearer token to a live session.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(&req) else {
        return AppError::Unauthorized.into_response();
    };

    let session = match state.session_service.get(&token) {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    req.extensions_mut()
        .insert(SessionContext::new(token, session));

    next.run(req).await
}
