use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Upload route.
///
/// ```text
/// POST /upload-image  -> upload_image
/// ```
///
/// The body limit leaves headroom over `max_upload_bytes` so a file just
/// over the limit reaches the intake and gets a precise 413 message.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload-image",
        post(uploads::upload_image).layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        )),
    )
}
