//! Router setup and configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{export, generate, handles, health, history, results, session};
use crate::api::middleware::session::require_session;
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes (no session required)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Public routes
    let public_routes = Router::new()
        .route("/sessions", post(session::create_session))
        .route("/handles/catalog", get(handles::catalog))
        .route("/template/preview", post(generate::preview_template));

    // Session-scoped routes (bearer session token required)
    let session_routes = Router::new()
        .route(
            "/session",
            get(session::get_session).delete(session::end_session),
        )
        .route(
            "/handles/custom",
            get(handles::list_custom)
                .post(handles::add_custom)
                .delete(handles::clear_custom),
        )
        .route("/handles/custom/bulk", post(handles::add_bulk))
        .route("/handles/custom/{index}", delete(handles::remove_custom))
        .route("/handles/selection", post(handles::preview_selection))
        .route("/validate", post(generate::validate))
        .route("/generate", post(generate::generate))
        .route("/results", get(results::table))
        .route("/results/list", get(results::list))
        .route("/export/{format}", get(export::download))
        .route("/history", get(history::recent).delete(history::clear))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .nest("/v1", public_routes.merge(session_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
