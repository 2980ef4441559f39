//! Session context extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::future::Future;

use crate::error::AppError;
use crate::service::SharedSession;

/// Session resolved from the request's bearer token.
#[derive(Clone)]
pub struct SessionContext {
    /// The session token.
    pub token: String,
    /// The session state.
    pub session: SharedSession,
}

impl SessionContext {
    /// Create a new session context.
    #[must_use]
    pub const fn new(token: String, session: SharedSession) -> Self {
        Self { token, session }
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        // Set by the session middleware
        let result = parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(AppError::Unauthorized);
        std::future::ready(result)
    }
}
