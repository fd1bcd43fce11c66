use axum::Json;

use crate::response::MessageResponse;

/// GET /api
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}
