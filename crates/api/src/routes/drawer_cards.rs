use axum::routing::{get, post};
use axum::Router;

use crate::handlers::drawer_cards;
use crate::state::AppState;

/// Drawer card routes mounted at `/drawer-cards`.
///
/// ```text
/// GET    /          -> list_cards
/// POST   /          -> create_card
/// POST   /reorder   -> reorder_cards
/// GET    /{id}      -> get_card
/// PUT    /{id}      -> update_card
/// DELETE /{id}      -> delete_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(drawer_cards::list_cards).post(drawer_cards::create_card),
        )
        .route("/reorder", post(drawer_cards::reorder_cards))
        .route(
            "/{id}",
            get(drawer_cards::get_card)
                .put(drawer_cards::update_card)
                .delete(drawer_cards::delete_card),
        )
}
