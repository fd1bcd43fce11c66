//! Image upload for drawer cards.
//!
//! Recommended format: PNG or WebP at 1200x800px (3:2). The size limit is
//! enforced twice: the route caps the request body, and the intake rejects
//! any file over the configured maximum.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::UploadResponse;
use crate::state::AppState;

/// Name of the multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// The `file` part as read from the multipart body.
struct FilePart {
    content_type: Option<String>,
    filename: Option<String>,
    data: Bytes,
}

/// POST /api/upload-image
///
/// Accepts a multipart body with a `file` field. Other fields are ignored.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut part: Option<FilePart> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_owned);
        let filename = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;
        part = Some(FilePart {
            content_type,
            filename,
            data,
        });
    }

    let part = part
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{FILE_FIELD}' field")))?;

    let stored = state
        .intake
        .accept(&part.data, part.content_type.as_deref(), part.filename.as_deref())
        .await?;

    tracing::info!(
        filename = %stored.filename,
        original = part.filename.as_deref().unwrap_or(""),
        bytes = part.data.len(),
        "Image uploaded",
    );

    Ok(Json(UploadResponse::from(stored)))
}
