use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Status check routes mounted at `/status`.
///
/// ```text
/// GET  /  -> list_status_checks
/// POST /  -> create_status_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(status::list_status_checks).post(status::create_status_check),
    )
}
