//! HTTP request handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use slotmatch_libs::{NewSlot, OverlapRequest, OverlapResponse, Participant, Slot, UserId};
use std::sync::Arc;

use crate::config::OverlapConfig;
use crate::error::ApiError;
use crate::store::SlotStore;

/// Application state shared across handlers.
pub struct AppState {
    pub store: Arc<dyn SlotStore>,
    pub overlap: OverlapConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn SlotStore>, overlap: OverlapConfig) -> Self {
        Self { store, overlap }
    }
}

/// GET /health
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /users/:id/slots - every slot stored for a user.
pub async fn list_slots_handler(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<Vec<Slot>>, ApiError> {
    let Path(user_id) = user_id?;

    let slots = state.store.slots_for_user(user_id).await?;

    Ok(Json(slots))
}

/// POST /users/:id/slots - store a new slot.
/// Either end may be null, but `start_time` may not come after `end_time`.
pub async fn create_slot_handler(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<UserId>, PathRejection>,
    body: Result<Json<NewSlot>, JsonRejection>,
) -> Result<(StatusCode, Json<Slot>), ApiError> {
    let Path(user_id) = user_id?;
    let Json(new_slot) = body?;

    new_slot.validate()?;

    let slot = state.store.create_slot(user_id, new_slot).await?;
    tracing::info!("Created slot {} for user {}", slot.id, user_id);

    Ok((StatusCode::CREATED, Json(slot)))
}

/// POST /overlap - time the two named users have in common.
///
/// Both users' slots are fetched independently and handed to the engine as
/// owned lists. The first user is the outer set.
pub async fn overlap_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OverlapRequest>, JsonRejection>,
) -> Result<Json<OverlapResponse>, ApiError> {
    let Json(request) = body?;
    let pair = request.user_pair()?;
    let mode = request.mode.unwrap_or(state.overlap.mode);

    let (first, second) = tokio::try_join!(
        state.store.slots_for_user(pair.first),
        state.store.slots_for_user(pair.second),
    )?;

    let first = Participant::new(pair.first, first);
    let second = Participant::new(pair.second, second);

    let windows = first.overlap_with(&second, mode);

    tracing::info!(
        "Users {} and {} share {} windows ({:?})",
        pair.first,
        pair.second,
        windows.len(),
        mode
    );

    Ok(Json(OverlapResponse::render(
        &windows,
        state.overlap.response_format,
    )))
}
