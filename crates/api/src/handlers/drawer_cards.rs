//! Handlers for the drawer card collection.
//!
//! Success responses are bare entities or arrays with no envelope. Errors use
//! the shared `{"error", "code"}` body from [`crate::error::AppError`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use drawer_core::drawer_card::{DrawerCard, DrawerCardPatch, NewDrawerCard, ReorderItem};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/drawer-cards
///
/// All cards sorted by `order` ascending (at most 100).
pub async fn list_cards(State(state): State<AppState>) -> AppResult<Json<Vec<DrawerCard>>> {
    let cards = state.cards.list().await?;
    Ok(Json(cards))
}

/// GET /api/drawer-cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> AppResult<Json<DrawerCard>> {
    let card = state.cards.get(&card_id).await?;
    Ok(Json(card))
}

/// POST /api/drawer-cards
pub async fn create_card(
    State(state): State<AppState>,
    Json(input): Json<NewDrawerCard>,
) -> AppResult<(StatusCode, Json<DrawerCard>)> {
    let card = state.cards.create(input).await?;

    tracing::info!(
        card_id = %card.id,
        title = %card.title,
        order = card.order,
        "Drawer card created",
    );

    Ok((StatusCode::CREATED, Json(card)))
}

/// PUT /api/drawer-cards/{id}
///
/// Partial update; omitted or `null` fields are left untouched.
pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Json(input): Json<DrawerCardPatch>,
) -> AppResult<Json<DrawerCard>> {
    let card = state.cards.update(&card_id, input).await?;

    tracing::info!(card_id = %card.id, order = card.order, "Drawer card updated");

    Ok(Json(card))
}

/// DELETE /api/drawer-cards/{id}
pub async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.cards.delete(&card_id).await?;

    tracing::info!(card_id = %card_id, "Drawer card deleted");

    Ok(Json(MessageResponse::new("Card deleted successfully")))
}

/// POST /api/drawer-cards/reorder
///
/// Body is an array of `{id, order}`. Unknown ids are skipped without error.
pub async fn reorder_cards(
    State(state): State<AppState>,
    Json(items): Json<Vec<ReorderItem>>,
) -> AppResult<Json<MessageResponse>> {
    let summary = state.cards.reorder(&items).await?;

    if !summary.unmatched_ids.is_empty() {
        tracing::debug!(
            unmatched_ids = ?summary.unmatched_ids,
            "Reorder skipped unknown card ids",
        );
    }
    tracing::info!(
        requested = summary.requested,
        matched = summary.matched,
        "Drawer cards reordered",
    );

    Ok(Json(MessageResponse::new("Cards reordered successfully")))
}
