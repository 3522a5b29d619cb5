//! Router construction.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_slot_handler, health_handler, list_slots_handler, overlap_handler, AppState,
};

/// Create the router.
///
/// Endpoints:
/// - GET    /health
/// - GET    /users/:id/slots  - List a user's slots
/// - POST   /users/:id/slots  - Store a slot for a user
/// - POST   /overlap          - Find the slots two users share
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/users/:id/slots",
            get(list_slots_handler).post(create_slot_handler),
        )
        .route("/overlap", post(overlap_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
