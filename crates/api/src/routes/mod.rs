pub mod drawer_cards;
pub mod health;
pub mod status;
pub mod uploads;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 hello world (GET)
///
/// /drawer-cards                     list, create
/// /drawer-cards/reorder             batch reorder (POST)
/// /drawer-cards/{id}                get, update, delete
///
/// /upload-image                     image upload (POST, multipart)
///
/// /status                           list, append
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::hello))
        .nest("/drawer-cards", drawer_cards::router())
        .merge(uploads::router(max_upload_bytes))
        .nest("/status", status::router())
}
