//! Image intake: validates an uploaded image and writes it under a unique
//! name in the upload directory.
//!
//! Only the declared MIME type is checked; the bytes are never inspected.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::new_id;

/// Declared MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp", "image/jpg"];

/// Extension used when the original filename has no usable one.
pub const DEFAULT_EXTENSION: &str = "png";

/// URL prefix under which stored images are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Default size limit (5 MiB).
pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

pub const UPLOAD_MESSAGE: &str = "Image uploaded successfully";

pub const RECOMMENDATION: &str = "Best format: PNG or WebP, Size: 1200x800px (3:2 ratio)";

/// An image that has been written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Generated name, `{uuid}.{ext}`.
    pub filename: String,
    /// Relative retrieval path, `/uploads/{filename}`.
    pub url: String,
}

/// Sink for uploaded images.
#[derive(Debug, Clone)]
pub struct ImageIntake {
    upload_dir: PathBuf,
    max_bytes: usize,
}

impl ImageIntake {
    pub fn new(upload_dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_bytes,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate and persist one upload.
    ///
    /// Fails with `InvalidFormat` for a MIME type outside
    /// [`ALLOWED_MIME_TYPES`] and with `PayloadTooLarge` above the size
    /// limit. Nothing is written in either case.
    pub async fn accept(
        &self,
        data: &[u8],
        content_type: Option<&str>,
        original_filename: Option<&str>,
    ) -> Result<StoredImage, CoreError> {
        validate_mime_type(content_type)?;

        if data.len() > self.max_bytes {
            return Err(CoreError::PayloadTooLarge {
                limit: self.max_bytes,
            });
        }

        let ext = extension_for(original_filename.unwrap_or_default());
        let filename = format!("{}.{ext}", new_id());
        let path = self.upload_dir.join(&filename);

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| CoreError::Internal(format!("create upload dir: {e}")))?;
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| CoreError::Internal(format!("write {}: {e}", path.display())))?;

        Ok(StoredImage {
            url: format!("{PUBLIC_PREFIX}/{filename}"),
            filename,
        })
    }
}

/// Reject any declared type outside the allow-list.
pub fn validate_mime_type(content_type: Option<&str>) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ALLOWED_MIME_TYPES.contains(&ct) => Ok(()),
        _ => Err(CoreError::InvalidFormat(
            "Invalid file type. Allowed: PNG, JPEG, WebP. Recommended: PNG or WebP at 1200x800px"
                .to_string(),
        )),
    }
}

/// Extension from the last dot-segment of `filename`.
///
/// Falls back to [`DEFAULT_EXTENSION`] when there is no dot, or when the
/// segment is empty or contains anything but ASCII alphanumerics (which
/// keeps path separators out of the stored name).
pub fn extension_for(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_string()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}
