//! Route definitions for the Smart Irrigation Assistant

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Form inputs and estimator
        .route("/options", get(handlers::get_form_options))
        .route("/estimates", post(handlers::create_estimate))
        .route("/recommendations", post(handlers::create_recommendation))
        // Chat panel
        .nest("/sessions", session_routes())
}

/// Chat session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_session))
        .route("/:session_id", delete(handlers::delete_session))
        .route(
            "/:session_id/messages",
            get(handlers::list_messages).post(handlers::post_message),
        )
}
