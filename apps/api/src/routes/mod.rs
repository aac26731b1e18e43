pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::notes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form page and trigger
        .route("/", get(handlers::handle_form_page))
        .route("/notes", post(handlers::handle_form_submit))
        // JSON API
        .route(
            "/api/v1/notes/generate",
            post(handlers::handle_generate_notes),
        )
        .with_state(state)
}
