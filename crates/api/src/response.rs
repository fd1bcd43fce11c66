//! Shared response bodies for API handlers.

use drawer_core::image_intake::{StoredImage, RECOMMENDATION, UPLOAD_MESSAGE};
use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Body returned by `POST /api/upload-image`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub url: String,
    pub message: &'static str,
    pub recommendation: &'static str,
}

impl From<StoredImage> for UploadResponse {
    fn from(stored: StoredImage) -> Self {
        Self {
            filename: stored.filename,
            url: stored.url,
            message: UPLOAD_MESSAGE,
            recommendation: RECOMMENDATION,
        }
    }
}
